use gettextrs::gettext;
use gtk4 as gtk;
use gtk4::prelude::*;

use super::state::AppState;
use crate::session::GameSummary;

fn clear_list(list: &gtk::ListBox) {
    while let Some(row) = list.first_child() {
        list.remove(&row);
    }
}

pub(super) fn fill_victory(st: &AppState, summary: &GameSummary) {
    let score = &summary.score;
    if let Some(label) = &st.final_moves_label {
        label.set_text(&format!("{}: {}", gettext("Moves"), score.moves));
    }
    if let Some(label) = &st.final_time_label {
        label.set_text(&format!("{}: {}s", gettext("Time"), score.elapsed_seconds));
    }
    if let Some(label) = &st.final_stars_label {
        label.set_text(&score.star_rating.to_string());
    }

    let Some(list) = &st.leaderboard_list else {
        return;
    };
    clear_list(list);
    if summary.leaderboard.is_empty() {
        let empty = gtk::Label::new(Some(&gettext("No scores yet")));
        empty.add_css_class("dim-label");
        list.append(&empty);
        return;
    }
    for (rank, entry) in summary.leaderboard.iter().enumerate() {
        let row = gtk::Label::builder()
            .label(format!("{}. {entry}", rank + 1))
            .halign(gtk::Align::Start)
            .css_classes(vec!["leaderboard-row"])
            .build();
        if *entry == *score {
            row.add_css_class("accent");
        }
        list.append(&row);
    }
}
