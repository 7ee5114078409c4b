use std::path::Path;

use gtk4 as gtk;
use gtk4::prelude::*;
use log::debug;

const SOUND_DIR: &str = "sounds";

#[derive(Clone, Copy, Debug)]
pub enum Sound {
    Flip,
    Match,
    Win,
}

/// Effects and background music. Files that are missing on disk are skipped,
/// the game just plays silent.
pub struct Sounds {
    flip: Option<gtk::MediaFile>,
    matched: Option<gtk::MediaFile>,
    win: Option<gtk::MediaFile>,
    music: Option<gtk::MediaFile>,
}

fn load_media(name: &str) -> Option<gtk::MediaFile> {
    let path = Path::new(SOUND_DIR).join(name);
    if !path.is_file() {
        debug!("sound {} not found, skipping", path.display());
        return None;
    }
    Some(gtk::MediaFile::for_filename(&path))
}

impl Sounds {
    pub fn load() -> Self {
        let music = load_media("bg-music.mp3");
        if let Some(music) = &music {
            music.set_loop(true);
        }
        Sounds {
            flip: load_media("flip.mp3"),
            matched: load_media("match.mp3"),
            win: load_media("win.mp3"),
            music,
        }
    }

    pub fn play(&self, sound: Sound) {
        let media = match sound {
            Sound::Flip => &self.flip,
            Sound::Match => &self.matched,
            Sound::Win => &self.win,
        };
        if let Some(media) = media {
            media.seek(0);
            media.play();
        }
    }

    pub fn set_music(&self, on: bool) {
        let Some(music) = &self.music else {
            return;
        };
        if on {
            music.play();
        } else {
            music.pause();
        }
    }
}
