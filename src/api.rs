pub const API_BASE: &str = "https://akabab.github.io/superhero-api";

/// Lowest and highest id known to the upstream catalog.
pub const HERO_ID_MIN: u32 = 1;
pub const HERO_ID_MAX: u32 = 563;

pub fn api_hero(base: &str, id: u32) -> String {
    format!("{}/api/id/{id}.json", base.trim_end_matches('/'))
}

/// Draws an id uniformly from `HERO_ID_MIN..=HERO_ID_MAX`.
pub fn random_hero_id() -> Result<u32, getrandom::Error> {
    let span = HERO_ID_MAX - HERO_ID_MIN + 1;
    // reject the tail of the u32 range so every id is equally likely
    let zone = u32::MAX - u32::MAX % span;
    loop {
        let r = getrandom::u32()?;
        if r < zone {
            return Ok(HERO_ID_MIN + r % span);
        }
    }
}
