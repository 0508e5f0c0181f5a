use super::*;
use crate::error::ExportError;
use crate::export::ExportFormat;

impl QuizApp {
    /// Exports the whole bank (never just the filtered view) and reports the
    /// outcome in the status line.
    pub fn export_bank(&mut self, format: ExportFormat) {
        match self.deliver_export(format) {
            Ok(location) => {
                log::info!("exported question bank to {location}");
                self.message = format!("💾 Exported {location}");
            }
            Err(err) => {
                log::error!("export to {} failed: {err}", format.extension());
                self.message = format!("❌ Export failed: {err}");
            }
        }
    }

    fn deliver_export(&self, format: ExportFormat) -> Result<String, ExportError> {
        let contents = format.render(self.session.catalog())?;
        let file_name = format.file_name(&self.config.export_stem);

        #[cfg(not(target_arch = "wasm32"))]
        {
            std::fs::create_dir_all(&self.config.export_dir)?;
            let path = self.config.export_dir.join(&file_name);
            std::fs::write(&path, contents)?;
            Ok(path.display().to_string())
        }
        #[cfg(target_arch = "wasm32")]
        {
            crate::web::download(&file_name, format.mime_type(), &contents)?;
            Ok(file_name)
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::super::test_support::ordered_app;
    use super::*;
    use crate::model::{Filter, Question, Topic};

    #[test]
    fn export_writes_the_full_bank_regardless_of_filters() {
        let scratch = tempfile::tempdir().expect("scratch dir");
        let dir = scratch.path().join("exports");
        let mut app = ordered_app(false, 0);
        app.config.export_dir = dir.clone();
        app.config.export_stem = "bank".into();
        app.change_topic(Filter::Only(Topic::Psk));
        app.start_quiz();
        app.choose_option(0);

        app.export_bank(ExportFormat::Json);
        app.export_bank(ExportFormat::Csv);

        let json = std::fs::read_to_string(dir.join("bank.json")).expect("json written");
        let parsed: Vec<Question> = serde_json::from_str(&json).expect("json parses");
        assert_eq!(parsed.len(), 70);
        let csv = std::fs::read_to_string(dir.join("bank.csv")).expect("csv written");
        assert_eq!(csv.lines().count(), 71);
        assert!(app.message.starts_with("💾 Exported"));
    }
}
