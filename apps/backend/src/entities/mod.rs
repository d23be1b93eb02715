pub mod contests;
pub mod players;
pub mod score_entries;

pub use contests::Entity as Contests;
pub use contests::Model as Contest;
pub use players::Entity as Players;
pub use players::Model as Player;
pub use score_entries::Entity as ScoreEntries;
pub use score_entries::Model as ScoreEntry;
