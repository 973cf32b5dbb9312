use crate::error::Result;
use crate::model::ListeningDuration;
use crate::store::DocumentStore;

/// The listening-duration report. Unlike the collections, this is a single
/// JSON object per document, and the stats screens cannot render without
/// it, so load failures propagate.
pub struct DurationRepository<S: DocumentStore> {
    store: S,
    cache: Option<ListeningDuration>,
}

impl<S: DocumentStore> DurationRepository<S> {
    pub const COLLECTION: &'static str = "duration_data";

    pub fn new(store: S) -> Self {
        Self { store, cache: None }
    }

    pub fn get_listening_duration(&mut self) -> Result<ListeningDuration> {
        if let Some(report) = &self.cache {
            return Ok(report.clone());
        }
        let report: ListeningDuration = self.store.load_document(Self::COLLECTION)?;
        self.cache = Some(report.clone());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    const REPORT: &str = r#"{
        "weekly": {
            "startDate": "10.19", "endDate": "10.25",
            "badgeTitle": "badge", "badgeDescription": "desc",
            "totalHours": 24, "totalMinutes": 29,
            "listenedDays": 7, "totalDays": 7,
            "dailyDurations": [{"dayLabel": "Mon", "hours": 3, "minutes": 30}],
            "topDate": "2025.10.23", "topHours": 6, "topMinutes": 50,
            "latestTime": "02:30", "comparisonMinutes": -6
        },
        "monthly": {
            "startDate": "9.1", "endDate": "9.30",
            "badgeTitle": "badge", "badgeDescription": "desc",
            "totalHours": 75, "totalMinutes": 30,
            "listenedDays": 30, "totalDays": 30,
            "dailyCheckins": [{"day": 1, "hasListened": true}],
            "latestTime": "04:55", "comparisonHours": 26, "comparisonMinutes": 12
        },
        "yearly": {
            "years": [{"year": 2024, "totalHours": 894, "totalSongs": 1731}]
        }
    }"#;

    #[test]
    fn test_reads_single_object_document() {
        let store = InMemoryStore::new().with_bundled_raw("duration_data", REPORT);
        let mut repo = DurationRepository::new(store);

        let report = repo.get_listening_duration().unwrap();
        assert_eq!(report.weekly.total_hours, 24);
        assert_eq!(report.monthly.comparison_hours, 26);
        assert_eq!(report.yearly.years[0].year, 2024);
    }

    #[test]
    fn test_missing_report_is_a_hard_error() {
        let mut repo = DurationRepository::new(InMemoryStore::new());
        assert!(repo.get_listening_duration().is_err());
    }
}
