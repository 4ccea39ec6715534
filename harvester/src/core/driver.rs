//! Fetch-merge-persist loop
//!
//! Each cycle fetches one random person and, after the pacing delay, one
//! random planet, projects both, reconciles them with the collection on disk
//! and writes the result back. The loop is done once both categories were
//! already at the cap when a cycle started merging; that cycle writes
//! nothing.
//!
//! The collection is re-read every cycle and written back without locking,
//! so a second writer on the same file can lose updates. Only one harvester
//! should target a given `output_path`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::{run_debug, run_error, run_info, run_warn};
use shared::{Category, Collection, RawEntity, RunId};

use crate::core::merger::merge;
use crate::core::projector::project;
use crate::error::HarvesterResult;
use crate::traits::{CatalogClient, CollectionStore};
use crate::types::{CycleOutcome, DriverOptions, DriverState, MergeOutcome, RunSummary, Settings};

/// Drives repeated harvesting cycles against a catalog and a store
pub struct CycleDriver<C, S>
where
    C: CatalogClient,
    S: CollectionStore,
{
    settings: Settings,
    options: DriverOptions,
    client: C,
    store: S,
    rng: StdRng,
    run_id: RunId,
    state: DriverState,
    cycles: u32,
    people: usize,
    planets: usize,
}

impl<C, S> CycleDriver<C, S>
where
    C: CatalogClient,
    S: CollectionStore,
{
    /// Fails with `ConfigError` if the settings cannot drive a cycle
    pub fn new(settings: Settings, options: DriverOptions, client: C, store: S) -> HarvesterResult<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            options,
            client,
            store,
            rng: StdRng::from_entropy(),
            run_id: RunId::new(),
            state: DriverState::Running,
            cycles: 0,
            people: 0,
            planets: 0,
        })
    }

    /// Replace the id sampler, e.g. with a seeded one
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = run_id;
        self
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Run cycles until both categories are full or `max_cycles` is hit.
    ///
    /// The first failing cycle ends the run with its error.
    pub async fn run(&mut self) -> HarvesterResult<RunSummary> {
        run_info!(
            self.run_id,
            "🚀 Harvesting into {} (cap {} per category)",
            self.store.location(),
            self.settings.count_of_people_and_planet
        );

        loop {
            if let Some(max_cycles) = self.options.max_cycles {
                if self.cycles >= max_cycles {
                    run_info!(self.run_id, "⏹️ Stopping after {} cycles", self.cycles);
                    break;
                }
            }

            match self.run_cycle().await {
                Ok(CycleOutcome::Done) => break,
                Ok(CycleOutcome::Continued { .. }) => {}
                Err(e) => {
                    run_error!(self.run_id, "❌ Cycle {} failed: {}", self.cycles, e);
                    return Err(e);
                }
            }
        }

        Ok(self.summary())
    }

    /// One fetch-project-load-merge-persist iteration
    pub async fn run_cycle(&mut self) -> HarvesterResult<CycleOutcome> {
        if self.state == DriverState::Done {
            return Ok(CycleOutcome::Done);
        }

        self.cycles += 1;
        run_debug!(self.run_id, "🔄 Cycle {} starting", self.cycles);

        let raw_person = self.fetch_random(Category::People, self.settings.max_person).await?;
        if !self.options.pacing.is_zero() {
            tokio::time::sleep(self.options.pacing).await;
        }
        let raw_planet = self.fetch_random(Category::Planets, self.settings.max_planets).await?;

        let person = project(&raw_person, Category::People);
        let planet = project(&raw_planet, Category::Planets);

        let Collection { people, planets } = self.store.load().await?.unwrap_or_default();

        let cap = self.settings.count_of_people_and_planet;
        let people_outcome = merge(people, vec![person], cap);
        let planets_outcome = merge(planets, vec![planet], cap);

        self.report(Category::People, &people_outcome);
        self.report(Category::Planets, &planets_outcome);

        if people_outcome.capped && planets_outcome.capped {
            self.state = DriverState::Done;
            self.people = people_outcome.existing_count;
            self.planets = planets_outcome.existing_count;
            run_info!(
                self.run_id,
                "✅ Both categories reached {} records after {} cycles",
                cap,
                self.cycles
            );
            return Ok(CycleOutcome::Done);
        }

        let merged = Collection {
            people: people_outcome.records,
            planets: planets_outcome.records,
        };
        self.store.save(&merged).await?;

        self.people = merged.len(Category::People);
        self.planets = merged.len(Category::Planets);
        run_info!(
            self.run_id,
            "💾 Saved {} people and {} planets to {}",
            self.people,
            self.planets,
            self.store.location()
        );

        Ok(CycleOutcome::Continued {
            people_appended: people_outcome.appended,
            planets_appended: planets_outcome.appended,
        })
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            cycles: self.cycles,
            state: self.state,
            people: self.people,
            planets: self.planets,
        }
    }

    async fn fetch_random(&mut self, category: Category, max_id: u32) -> HarvesterResult<RawEntity> {
        let id = self.rng.gen_range(1..=max_id);
        run_debug!(self.run_id, "📡 Fetching {} #{}", category, id);
        self.client.fetch(category, id).await
    }

    fn report(&self, category: Category, outcome: &MergeOutcome) {
        if outcome.capped {
            run_warn!(
                self.run_id,
                "Number of {} reached `count_of_people_and_planet` ({})",
                category,
                outcome.existing_count
            );
            return;
        }
        for duplicate in &outcome.duplicates {
            run_warn!(
                self.run_id,
                "Field {} already exists in {}",
                duplicate.name.as_deref().unwrap_or("<unnamed>"),
                category
            );
        }
    }
}
