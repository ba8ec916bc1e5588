use std::io::{self, Write};

use finder_core::{Effect, Msg};
use finder_engine::{extractor_review_filename, Engine};
use finder_logging::{finder_info, finder_warn};

use super::ui::render;

/// Executes the effects requested by `update`, one at a time.
pub struct EffectRunner<'a> {
    engine: &'a Engine,
}

impl<'a> EffectRunner<'a> {
    pub fn new(engine: &'a Engine) -> Self {
        Self { engine }
    }

    /// Runs one effect and returns the message carrying its outcome, if any.
    pub async fn run(&self, effect: Effect, out: &mut dyn Write) -> io::Result<Option<Msg>> {
        match effect {
            Effect::Notify(notice) => {
                out.write_all(render::render_notice(&notice).as_bytes())?;
                out.flush()?;
                Ok(None)
            }
            Effect::Search { query } => {
                finder_info!("Search query_len={} query={:?}", query.len(), query);
                let movies = self
                    .engine
                    .search
                    .search(&query, self.engine.max_results)
                    .await;
                Ok(Some(Msg::SearchCompleted(movies)))
            }
            Effect::CheckExists { title, year } => {
                let found = self.engine.gateway.check_exists(&title, &year).await;
                Ok(Some(Msg::ExistenceChecked { found }))
            }
            Effect::Extract { title, year } => {
                let result = self.engine.gateway.extract_review(&title, &year).await;
                Ok(Some(Msg::ExtractionFinished(result)))
            }
            Effect::ShowReview { title, year } => {
                let text = match self.engine.store.read(&title, &year) {
                    Ok(Some(content)) => render::render_review(&title, &year, &content),
                    Ok(None) => {
                        render::render_review_missing(&extractor_review_filename(&title, &year))
                    }
                    Err(err) => {
                        finder_warn!("Reading review for {:?} ({}) failed: {}", title, year, err);
                        render::render_review_error(&err)
                    }
                };
                out.write_all(text.as_bytes())?;
                out.flush()?;
                Ok(None)
            }
        }
    }
}
