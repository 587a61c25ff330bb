pub mod history;
pub mod init;
pub mod leaderboard;
pub mod menu;
pub mod take;
pub mod validate;
