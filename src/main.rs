use gtk4::glib;

fn main() -> glib::ExitCode {
    pairs::ui::app::run()
}
