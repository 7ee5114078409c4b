pub mod app;
mod board;
mod confetti;
mod dialogs;
mod hud;
mod records;
mod scene;
mod sound;
mod state;
mod ticker;
