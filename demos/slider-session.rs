/// Slider session demo
/// This program edits a few controllers, walks the history back and forth,
/// and restarts from the file the history was mirrored to.
///
use rand::rngs::StdRng;
use rand::SeedableRng;
use sketch_history::controller::Controller;
use sketch_history::error::GuiResult;
use sketch_history::gui::{Gui, GuiBuilder};
use sketch_history::shortcut::KeyChord;
use sketch_history::storage::FileStore;
use sketch_history::value::Color;
use sketch_history::widgets::{Button, ColorPicker, Select, Slider};
use std::path::Path;

fn build(dir: &Path) -> GuiResult<Gui<'static>> {
    let mut gui = GuiBuilder::new("generator")
        .capacity(50)
        .store(FileStore::new(dir))
        .build();
    gui.add(
        Controller::builder("speed", Slider::new(0.0, 10.0, 0.5))
            .default_value(5.0)
            .randomizable(true)
            .on_change(|name, value| println!("  {} = {:?}", name, value))
            .build()?,
    )?;
    gui.add(
        Controller::builder("pattern", Select::new(["grid", "spiral", "waves"]))
            .default_value("grid")
            .randomizable(true)
            .on_change(|name, value| println!("  {} = {:?}", name, value))
            .build()?,
    )?;
    gui.add(
        Controller::builder("tint", ColorPicker::new())
            .default_value(Color::rgb(221, 167, 2))
            .randomizable(true)
            .build()?,
    )?;
    gui.add(
        Controller::builder("reseed", Button)
            .on_change(|name, _| println!("  {} pressed", name))
            .build()?,
    )?;
    Ok(gui)
}

fn print_position(gui: &Gui) {
    let h = gui.history();
    println!(
        "  history: {} entries, cursor {:?}, {} undoable, {} redoable",
        h.len(),
        h.cursor(),
        h.undoable_count(),
        h.redoable_count()
    );
}

fn main() -> GuiResult<()> {
    tracing_subscriber::fmt().init();
    let dir = tempfile::tempdir()?;

    println!("# FIRST SESSION #");
    {
        let mut gui = build(dir.path())?;
        gui.restore_from_storage()?;

        println!("## Edit ##");
        gui.set_value("speed", 7.5)?;
        gui.set_value("pattern", "spiral")?;
        gui.press("reseed")?;
        print_position(&gui);

        println!("## Randomize ##");
        let report = gui.randomize_batch(&mut StdRng::seed_from_u64(42))?;
        println!("  touched {:?}", report.touched);
        print_position(&gui);

        println!("## Undo twice (ctrl+z) ##");
        gui.handle_shortcut(&KeyChord::new('z').ctrl())?;
        gui.handle_shortcut(&KeyChord::new('z').ctrl())?;
        print_position(&gui);

        println!("## Redo (ctrl+shift+z) ##");
        gui.handle_shortcut(&KeyChord::new('z').ctrl().shift())?;
        print_position(&gui);

        println!("## Export ##");
        println!("{}", gui.export_settings()?);
    }

    println!("\n# SECOND SESSION #");
    let mut gui = build(dir.path())?;
    let restored = gui.restore_from_storage()?;
    println!("  restored from storage: {}", restored);
    println!("  speed = {:?}", gui.value("speed"));
    print_position(&gui);
    Ok(())
}
