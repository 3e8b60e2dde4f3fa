use std::fs::File;
use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use crate::application::{PropertyReviews, ReviewService};
use crate::domain::{ListOptions, NewReview, ReviewPatch, SortBy, SortOrder};
use crate::io::Exporter;

/// Recensio - Property Review Ledger
#[derive(Parser)]
#[command(name = "recensio")]
#[command(about = "A local-first ledger for property reviews")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, default_value = "recensio.db")]
    pub database: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new database
    Init,

    /// Add a review for a property
    Add {
        /// Property id
        property: i64,

        /// Rating in stars (1-5)
        #[arg(short, long)]
        rating: i64,

        /// Review text (10-1000 characters)
        #[arg(short, long)]
        comment: String,

        /// Short review title
        #[arg(short, long)]
        title: Option<String>,

        /// Reviewer id
        #[arg(long)]
        user_id: Option<String>,

        /// Reviewer display name
        #[arg(long)]
        user_name: Option<String>,

        /// Mark the review as verified
        #[arg(long)]
        verified: bool,
    },

    /// List reviews for a property
    List {
        /// Property id
        property: i64,

        /// Sort key: date, rating, helpful (anything else keeps insertion order)
        #[arg(short, long, default_value = "date")]
        sort_by: String,

        /// Sort order: asc, desc
        #[arg(short = 'o', long, default_value = "desc")]
        sort_order: String,
    },

    /// Update an existing review
    Update {
        /// Review id
        id: i64,

        /// New rating in stars (1-5)
        #[arg(short, long)]
        rating: Option<i64>,

        /// New review text (10-1000 characters)
        #[arg(short, long)]
        comment: Option<String>,

        /// New review title
        #[arg(short, long)]
        title: Option<String>,

        /// Set the verified flag
        #[arg(long)]
        verified: Option<bool>,
    },

    /// Delete a review
    Delete {
        /// Review id
        id: i64,
    },

    /// Export all reviews to CSV or JSON
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Format: csv, json
        #[arg(short, long, default_value = "csv")]
        format: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Init => {
                ReviewService::init(&self.database).await?;
                println!("Database initialized: {}", self.database);
            }

            Commands::Add {
                property,
                rating,
                comment,
                title,
                user_id,
                user_name,
                verified,
            } => {
                let mut service = ReviewService::connect(&self.database).await?;

                let mut data = NewReview::new(property, rating, comment).with_verified(verified);
                if let Some(title) = title {
                    data = data.with_title(title);
                }
                if let Some(user_id) = user_id {
                    data = data.with_user_id(user_id);
                }
                if let Some(user_name) = user_name {
                    data = data.with_user_name(user_name);
                }

                let review = service.create(data).await?;
                println!(
                    "Recorded review #{} for property {} ({} stars)",
                    review.id, review.property_id, review.rating
                );
            }

            Commands::List {
                property,
                sort_by,
                sort_order,
            } => {
                let service = ReviewService::connect(&self.database).await?;

                // An unrecognized sort key lists in insertion order
                let options = ListOptions {
                    sort_by: SortBy::from_str(&sort_by),
                    sort_order: SortOrder::from_str(&sort_order).unwrap_or(SortOrder::Desc),
                };

                let result = service.list_by_property(property, &options);
                print_listing(property, &result);
            }

            Commands::Update {
                id,
                rating,
                comment,
                title,
                verified,
            } => {
                let mut service = ReviewService::connect(&self.database).await?;

                let patch = ReviewPatch {
                    rating,
                    comment,
                    title,
                    verified,
                    ..ReviewPatch::default()
                };

                let review = service.update(id, patch).await?;
                println!(
                    "Updated review #{} for property {} ({} stars)",
                    review.id, review.property_id, review.rating
                );
            }

            Commands::Delete { id } => {
                let mut service = ReviewService::connect(&self.database).await?;
                service.delete(id).await?;
                println!("Deleted review #{}", id);
            }

            Commands::Export { output, format } => {
                let service = ReviewService::connect(&self.database).await?;
                let exporter = Exporter::new(&service);

                let writer: Box<dyn Write> = match &output {
                    Some(path) => Box::new(
                        File::create(path)
                            .with_context(|| format!("Failed to create {}", path))?,
                    ),
                    None => Box::new(io::stdout()),
                };

                let count = match format.as_str() {
                    "csv" => exporter.export_reviews_csv(writer)?,
                    "json" => exporter.export_reviews_json(writer)?,
                    other => bail!("Unknown export format '{}'. Use csv or json", other),
                };

                if let Some(path) = output {
                    println!("Exported {} reviews to {}", count, path);
                }
            }
        }

        Ok(())
    }
}

fn print_listing(property: i64, result: &PropertyReviews) {
    println!(
        "Property {}: {} reviews, {:.1} stars average",
        property, result.total_count, result.average_rating
    );

    for review in &result.reviews {
        let verified = if review.verified { " [verified]" } else { "" };
        println!(
            "#{} {} stars | {} | {}{} | {} helpful",
            review.id,
            review.rating,
            review.date.format("%Y-%m-%d"),
            review.user_name,
            verified,
            review.helpful
        );
        if !review.title.is_empty() {
            println!("    {}", review.title);
        }
        println!("    {}", review.comment);
    }
}
