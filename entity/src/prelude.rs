pub use super::ethnicity::Entity as Ethnicity;
pub use super::instrument::Entity as Instrument;
pub use super::performer::Entity as Performer;
pub use super::performer_instrument::Entity as PerformerInstrument;
pub use super::recording::Entity as Recording;
pub use super::recording_instrument::Entity as RecordingInstrument;
pub use super::recording_like::Entity as RecordingLike;
pub use super::recording_performer::Entity as RecordingPerformer;
pub use super::user::Entity as User;
