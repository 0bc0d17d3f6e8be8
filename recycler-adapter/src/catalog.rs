//! The demo dataset: cheese names and the drawables shown next to them.

use rand::Rng;
use recycler::{DrawableId, DrawablePool, Error};

pub static CHEESES: &[&str] = &[
    "Abbaye de Belloc",
    "Abbaye du Mont des Cats",
    "Abertam",
    "Abondance",
    "Ackawi",
    "Acorn",
    "Adelost",
    "Affidelice au Chablis",
    "Afuega'l Pitu",
    "Airag",
    "Airedale",
    "Aisy Cendre",
    "Allgauer Emmentaler",
    "Alverca",
    "Ambert",
    "American Cheese",
    "Ami du Chambertin",
    "Anejo Enchilado",
    "Anneau du Vic-Bilh",
    "Anthoriro",
    "Appenzell",
    "Aragon",
    "Ardi Gasna",
    "Ardrahan",
    "Armenian String",
    "Aromes au Gene de Marc",
    "Asadero",
    "Asiago",
    "Aubisque Pyrenees",
    "Autun",
    "Avaxtskyr",
    "Baby Swiss",
    "Babybel",
    "Baguette Laonnaise",
    "Bakers",
    "Baladi",
    "Balaton",
    "Bandal",
    "Banon",
    "Barry's Bay Cheddar",
    "Basing",
    "Basket Cheese",
    "Bath Cheese",
    "Bavarian Bergkase",
    "Baylough",
    "Beaufort",
    "Beauvoorde",
    "Beenleigh Blue",
    "Beer Cheese",
    "Bel Paese",
];

/// The five cheese pictures.
pub static DRAWABLES: &[DrawableId] = &[
    DrawableId(1),
    DrawableId(2),
    DrawableId(3),
    DrawableId(4),
    DrawableId(5),
];

/// A [`DrawablePool`] that picks uniformly from a fixed set of drawables.
#[derive(Clone, Debug)]
pub struct RandomDrawables<R> {
    rng: R,
    pool: &'static [DrawableId],
}

impl<R: Rng> RandomDrawables<R> {
    /// Picks from [`DRAWABLES`].
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            pool: DRAWABLES,
        }
    }

    /// Picks from `pool`, which must not be empty.
    pub fn with_pool(rng: R, pool: &'static [DrawableId]) -> Result<Self, Error> {
        if pool.is_empty() {
            return Err(Error::EmptySource { count: 1 });
        }
        Ok(Self { rng, pool })
    }

    pub fn pool(&self) -> &'static [DrawableId] {
        self.pool
    }
}

impl<R: Rng> DrawablePool for RandomDrawables<R> {
    fn pick_random(&mut self) -> DrawableId {
        self.pool[self.rng.random_range(0..self.pool.len())]
    }
}
