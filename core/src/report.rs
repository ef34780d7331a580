use std::path::PathBuf;

/// Outcome of converting a single file.
#[derive(Debug, Clone)]
pub struct FileResult {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub error: Option<String>,
}

impl FileResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate report for one folder run.
#[derive(Debug, Default)]
pub struct Report {
    pub results: Vec<FileResult>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, result: FileResult) {
        self.results.push(result);
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn error_count(&self) -> usize {
        self.results.iter().filter(|r| !r.is_success()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileResult> {
        self.results.iter().filter(|r| !r.is_success())
    }

    pub fn print_summary(&self) {
        println!("\n--- Summary ---");
        println!(
            "Files converted: {} | Errors: {}",
            self.success_count(),
            self.error_count()
        );

        for r in self.failures() {
            if let Some(ref err) = r.error {
                println!("  ERROR {}: {}", r.source.display(), err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, error: Option<&str>) -> FileResult {
        FileResult {
            source: PathBuf::from(format!("in/{name}.png")),
            destination: PathBuf::from(format!("webp/{name}.webp")),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_counts() {
        let mut report = Report::new();
        report.add(result("a", None));
        report.add(result("b", Some("failed to decode image: bad header")));
        report.add(result("c", None));

        assert_eq!(report.success_count(), 2);
        assert_eq!(report.error_count(), 1);
        let failed: Vec<_> = report.failures().map(|r| r.source.clone()).collect();
        assert_eq!(failed, vec![PathBuf::from("in/b.png")]);
    }

    #[test]
    fn test_empty_report() {
        let report = Report::new();
        assert_eq!(report.success_count(), 0);
        assert_eq!(report.error_count(), 0);
    }
}
