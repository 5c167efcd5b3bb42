pub use self::{
    attributes::SunnyAttributes,
    difficulty::{compute_difficulty, SunnyDifficulty},
    rates::SunnyRates,
    strains::SunnyStrains,
};

mod attributes;
mod difficulty;
mod rates;
mod strains;
