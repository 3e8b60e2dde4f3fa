use std::io::Write;

use anyhow::Result;

use crate::application::ReviewService;

/// Exporter for converting the review collection to external formats.
pub struct Exporter<'a> {
    service: &'a ReviewService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a ReviewService) -> Self {
        Self { service }
    }

    /// Export all reviews to CSV format. Returns the number of rows written.
    pub fn export_reviews_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let reviews = self.service.all_reviews();
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "id",
            "property_id",
            "user_id",
            "user_name",
            "rating",
            "title",
            "comment",
            "date",
            "verified",
            "helpful",
        ])?;

        let mut count = 0;
        for review in reviews {
            csv_writer.write_record([
                review.id.to_string(),
                review.property_id.to_string(),
                review.user_id.clone(),
                review.user_name.clone(),
                review.rating.to_string(),
                review.title.clone(),
                review.comment.clone(),
                review.date.to_rfc3339(),
                review.verified.to_string(),
                review.helpful.to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export all reviews to pretty-printed JSON. Returns the record count.
    pub fn export_reviews_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        let reviews = self.service.all_reviews();
        serde_json::to_writer_pretty(&mut writer, reviews)?;
        writeln!(writer)?;
        Ok(reviews.len())
    }
}
