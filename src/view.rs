//! Terminal presentation of fetched heroes.
//!
//! Fetches run as independent tasks and hand their outcome to a single
//! consumer, so the screen is only ever touched from one place.

use crate::core::{save_portrait, HeroClient};
use crate::error::FetchError;
use crate::types::{FetchedHero, Portrait};
use colored::Colorize;
use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::StreamExt;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// The six display fields plus the portrait.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroCard {
    pub name: String,
    pub full_name: String,
    pub stats: String,
    pub place_of_birth: String,
    pub gender: String,
    pub portrait: Option<Portrait>,
    pub failed: bool,
}

impl HeroCard {
    pub fn from_fetched(fetched: &FetchedHero) -> Self {
        let hero = &fetched.hero;
        let s = &hero.powerstats;
        Self {
            name: format!("Name: {}", hero.name),
            full_name: format!("Full Name: {}", hero.biography.full_name),
            stats: format!(
                "Intelligence: {}\nStrength: {}\nSpeed: {}\nDurability: {}\nPower: {}\nCombat: {}",
                s.intelligence, s.strength, s.speed, s.durability, s.power, s.combat
            ),
            place_of_birth: format!("Place of Birth: {}", hero.biography.place_of_birth),
            gender: format!("Gender: {}", hero.appearance.gender),
            portrait: fetched.portrait.clone(),
            failed: false,
        }
    }

    /// Card shown when the hero request failed: everything cleared.
    pub fn failure(err: &FetchError) -> Self {
        Self {
            name: format!("Error: {err}"),
            full_name: "Please try again!".to_string(),
            failed: true,
            ..Self::default()
        }
    }

    pub fn from_outcome(outcome: &Result<FetchedHero, FetchError>) -> Self {
        match outcome {
            Ok(fetched) => Self::from_fetched(fetched),
            Err(e) => Self::failure(e),
        }
    }
}

/// Outcome of one fetch on its way to the screen.
#[derive(Debug)]
pub struct Delivery {
    pub id: u32,
    pub outcome: Result<FetchedHero, FetchError>,
}

pub trait Screen {
    fn show(&mut self, id: u32, card: &HeroCard);
}

/// Writes cards to a terminal (or any writer).
pub struct TerminalScreen<W> {
    out: W,
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, id: u32, card: &HeroCard) -> std::io::Result<()> {
        writeln!(self.out, "{}", format!("#{id}").dimmed())?;
        if card.failed {
            writeln!(self.out, "{}", card.name.red())?;
            writeln!(self.out, "{}", card.full_name.yellow())?;
            return Ok(());
        }
        writeln!(self.out, "{}", card.name.bold())?;
        writeln!(self.out, "{}", card.full_name)?;
        writeln!(self.out, "{}", card.stats.green())?;
        writeln!(self.out, "{}", card.place_of_birth)?;
        writeln!(self.out, "{}", card.gender)?;
        match &card.portrait {
            Some(p) => writeln!(
                self.out,
                "Portrait: {:?} {}x{} ({} bytes)",
                p.format,
                p.width,
                p.height,
                p.bytes.len()
            )?,
            None => writeln!(self.out, "{}", "Portrait: [no image]".dimmed())?,
        }
        self.out.flush()
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn show(&mut self, id: u32, card: &HeroCard) {
        if let Err(e) = self.render(id, card) {
            eprintln!("{}", e);
        }
    }
}

/// Starts fetch pipelines and forwards their outcomes to the screen task.
///
/// Pipelines are not cancelled: if two overlap, the one that finishes last
/// is shown last.
#[derive(Clone)]
pub struct Dispatcher {
    client: Arc<HeroClient>,
    tx: UnboundedSender<Delivery>,
    save_dir: Option<PathBuf>,
}

impl Dispatcher {
    pub fn new(client: HeroClient) -> (Self, UnboundedReceiver<Delivery>) {
        let (tx, rx) = unbounded();
        let dispatcher = Self {
            client: Arc::new(client),
            tx,
            save_dir: None,
        };
        (dispatcher, rx)
    }

    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = Some(dir.into());
        self
    }

    pub fn request(&self, id: u32) -> JoinHandle<()> {
        let client = self.client.clone();
        let tx = self.tx.clone();
        let save_dir = self.save_dir.clone();
        tokio::spawn(async move {
            let outcome = client.fetch_hero(id).await;
            if let (Some(dir), Ok(fetched)) = (&save_dir, &outcome) {
                match save_portrait(dir, fetched).await {
                    Ok(Some(path)) => debug!(id, path = %path.display(), "portrait saved"),
                    Ok(None) => {}
                    Err(e) => warn!(id, error = %e, "failed to save portrait"),
                }
            }
            if tx.unbounded_send(Delivery { id, outcome }).is_err() {
                debug!(id, "screen closed before delivery");
            }
        })
    }

    /// Requests a uniformly random hero.
    pub fn request_random(&self) -> Result<JoinHandle<()>, getrandom::Error> {
        let id = crate::api::random_hero_id()?;
        Ok(self.request(id))
    }
}

/// Renders deliveries one at a time until every sender is gone.
pub async fn run_screen<S: Screen>(mut rx: UnboundedReceiver<Delivery>, screen: &mut S) {
    while let Some(delivery) = rx.next().await {
        let card = HeroCard::from_outcome(&delivery.outcome);
        screen.show(delivery.id, &card);
    }
}
