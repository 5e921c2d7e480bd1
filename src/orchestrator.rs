use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::console::render;
use crate::recipes::house_bill::{self, HouseBillOptions};
use crate::recipes::{Recipe, workshop};
use crate::summarize::ThrottleLimits;

/// Runs one recipe per process. Recipes load their own credentials so a
/// missing variable fails before any request goes out.
pub struct Orchestrator {
    out_dir: PathBuf,
}

impl Orchestrator {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }

    pub async fn run(&self, recipe: Recipe) -> Result<()> {
        tokio::fs::create_dir_all(&self.out_dir).await?;
        info!("Running recipe {:?}", recipe);

        match recipe {
            Recipe::HouseBill {
                pdf,
                pages_per_window,
                max_words,
                max_window_words,
                max_window_requests,
                pause_secs,
            } => {
                let opts = HouseBillOptions {
                    pdf,
                    pages_per_window,
                    max_words,
                    limits: ThrottleLimits {
                        max_words: max_window_words,
                        max_requests: max_window_requests,
                        pause: Duration::from_secs(pause_secs),
                    },
                };
                let records = house_bill::run(&opts, &self.out_dir).await?;
                render::display_summaries(&records);
            }
            Recipe::Model => {
                workshop::model().await?;
            }
            Recipe::Advisor => {
                workshop::advisor().await?;
            }
            Recipe::ArtTherapy => {
                workshop::art_therapy().await?;
            }
            Recipe::Expenses { data } => {
                workshop::expenses(data.as_ref()).await?;
            }
            Recipe::Gptuesday => {
                workshop::gptuesday().await?;
            }
            Recipe::FightNight => {
                workshop::fight_night(&self.out_dir).await?;
            }
            Recipe::Discord { message } => {
                workshop::discord(&message).await?;
            }
        }
        Ok(())
    }
}
