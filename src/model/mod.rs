pub use rosu_map::section::general::GameMode;

pub use self::{
    chart::ManiaChart,
    error::SunnyError,
    note::RawNote,
    speed::SpeedModifier,
};

pub(crate) use self::note::Note;

mod chart;
mod error;
mod note;
mod speed;
