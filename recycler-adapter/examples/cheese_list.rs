// Example: the cheese list screen, paged from header to footer.
//
// Run with `--features tracing` and `RUST_LOG=recycler=trace,recycler_adapter=debug` to see the
// binds and layout passes.
use recycler::BindEnv;
use recycler_adapter::{
    ImmediateImages, InteractionLog, ListScreen, RandomDrawables, ScreenOptions,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), recycler::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = rand::rng();
    let options = ScreenOptions::default().with_viewport_rows(8);
    let mut screen = ListScreen::cheeses(options, &mut rng)?;

    let mut images = ImmediateImages;
    let mut drawables = RandomDrawables::new(rand::rng());
    let Some(host) = screen.host_mut() else {
        return Ok(());
    };

    loop {
        let pass = host.layout(&mut BindEnv::new(&mut images, &mut drawables))?;
        println!("-- rows {:?} {pass:?}", host.visible_range());
        host.for_each_attached(|row, cell| {
            let image = cell.as_item().and_then(|c| c.image().image());
            println!("{row:>3} {:<24} {image:?}", cell.text());
        });

        let range = host.visible_range();
        if range.end >= host.adapter().row_count() {
            break;
        }
        host.scroll_by(range.len() as isize);
    }

    let mut log = InteractionLog::new();
    let last = host.adapter().row_count() - 1;
    host.click(last, &mut log);
    host.click(last - 1, &mut log);
    host.scroll_to_row(0);
    host.layout(&mut BindEnv::new(&mut images, &mut drawables))?;
    host.click(0, &mut log);
    for event in log.events() {
        println!("{event:?}");
    }

    let empty = ListScreen::<recycler::DefaultCellFactory>::new_empty(ScreenOptions::default());
    println!("empty screen: {:?}", empty.placeholder());
    Ok(())
}
