mod journey;

pub use journey::JourneyCommands;
