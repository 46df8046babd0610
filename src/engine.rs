//! The evolutionary loop.
//!
//! [`Painter`] owns a ranked population and advances it one generation at a time:
//!
//! 1. mutation pass over the members, best first, using the ranking from the previous
//!    scoring step (it is not refreshed after mutating),
//! 2. recombination pass: every child chains the top `recombine_depth` members,
//! 3. the children replace the population and are scored and ranked.

use std::sync::atomic::{AtomicBool, Ordering};

use image::RgbImage;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::canvas::ensure_same_shape;
use crate::config::PainterConfig;
use crate::error::Result;
use crate::fitness::evaluate;
use crate::operators::{mutate, recombine};

/// A population slot: an image and the score it had when last ranked.
#[derive(Debug, Clone)]
pub struct Member {
    pub image: RgbImage,
    pub fitness: f64,
}

impl Member {
    fn scored(image: RgbImage) -> Self {
        let fitness = evaluate(&image);
        Self { image, fitness }
    }
}

/// Outcome of [`Painter::run`].
#[derive(Debug, Clone)]
pub struct Painting {
    pub image: RgbImage,
    pub fitness: f64,
    /// Generations executed, including any from earlier `step` calls.
    pub generations: usize,
    pub cancelled: bool,
    /// Best score after initialization and after each generation of this run.
    pub fitness_history: Vec<f64>,
}

pub struct Painter<R: Rng = StdRng> {
    config: PainterConfig,
    rng: R,
    population: Vec<Member>,
    generation: usize,
}

impl Painter<StdRng> {
    /// Validate `config` and seed the population from two equally sized images.
    ///
    /// Validation always runs here, even when the caller already checked `config`.
    pub fn new(config: PainterConfig, first: &RgbImage, second: &RgbImage) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, first, second, rng)
    }
}

impl<R: Rng> Painter<R> {
    /// Like [`Painter::new`] but with a caller-supplied random source.
    pub fn with_rng(
        config: PainterConfig,
        first: &RgbImage,
        second: &RgbImage,
        mut rng: R,
    ) -> Result<Self> {
        config.validate()?;
        ensure_same_shape(first, second)?;

        let population = (0..config.pools)
            .map(|_| recombine(first, second, &mut rng).map(Member::scored))
            .collect::<Result<Vec<_>>>()?;

        let mut painter = Self {
            config,
            rng,
            population,
            generation: 0,
        };
        painter.rank();
        log::debug!(
            "initial population of {} ranked, best score {:.2}",
            painter.population.len(),
            painter.best().fitness
        );
        Ok(painter)
    }

    pub fn config(&self) -> &PainterConfig {
        &self.config
    }

    /// Members in rank order as of the last scoring step.
    pub fn population(&self) -> &[Member] {
        &self.population
    }

    pub fn best(&self) -> &Member {
        &self.population[0]
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Advance one generation.
    pub fn step(&mut self) -> Result<()> {
        let mutated = self.mutation_pass()?;
        log::debug!("generation {}: {mutated} mutations", self.generation);

        let children = self.recombination_pass()?;
        self.population = children.into_iter().map(Member::scored).collect();
        self.rank();
        self.generation += 1;
        Ok(())
    }

    /// Run every remaining configured generation.
    pub fn run(&mut self) -> Result<Painting> {
        self.run_with_cancel(None)
    }

    /// Run until the configured generation count or until `cancel` is set.
    ///
    /// The flag is only checked between generations.
    pub fn run_with_cancel(&mut self, cancel: Option<&AtomicBool>) -> Result<Painting> {
        let mut fitness_history = Vec::with_capacity(self.config.generations + 1);
        fitness_history.push(self.best().fitness);
        let mut cancelled = false;

        while self.generation < self.config.generations {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                log::info!("cancelled after {} generations", self.generation);
                cancelled = true;
                break;
            }
            self.step()?;
            fitness_history.push(self.best().fitness);

            let interval = self.config.log_interval;
            if interval > 0 && self.generation % interval == 0 {
                log::info!(
                    "gen {}: best score {:.2}",
                    self.generation,
                    self.best().fitness
                );
            }
        }

        let best = self.best();
        Ok(Painting {
            image: best.image.clone(),
            fitness: best.fitness,
            generations: self.generation,
            cancelled,
            fitness_history,
        })
    }

    /// Returns how many members were mutated. Scores are left stale.
    fn mutation_pass(&mut self) -> Result<usize> {
        let mut mutated = 0;
        for member in &mut self.population {
            if self.rng.random_bool(self.config.mutation_rate) {
                let image = std::mem::replace(&mut member.image, RgbImage::new(0, 0));
                member.image = mutate(image, &mut self.rng)?;
                mutated += 1;
            }
        }
        Ok(mutated)
    }

    /// Every child starts from the `recombine_depth`-th ranked member and folds in the
    /// better ones down to the best, each time with a coin flip for argument order.
    fn recombination_pass(&mut self) -> Result<Vec<RgbImage>> {
        let depth = self.config.recombine_depth;
        let mut children = Vec::with_capacity(self.config.pools);
        for _ in 0..self.config.pools {
            let mut child = self.population[depth - 1].image.clone();
            for survivor in self.population[..depth - 1].iter().rev() {
                child = if self.rng.random_bool(0.5) {
                    recombine(&survivor.image, &child, &mut self.rng)?
                } else {
                    recombine(&child, &survivor.image, &mut self.rng)?
                };
            }
            children.push(child);
        }
        Ok(children)
    }

    /// Sort ascending by score; ties keep their current order.
    fn rank(&mut self) {
        self.population.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));
    }
}
