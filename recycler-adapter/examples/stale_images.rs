// Example: fast scrolling with slow image loads. Loads issued for a cell's previous row are
// dropped when they finally complete.
use rand::SeedableRng;
use rand::rngs::StdRng;
use recycler::{BindEnv, DefaultCellFactory, ListAdapter};
use recycler_adapter::{DeferredImages, ListHost, RandomDrawables};

fn main() -> Result<(), recycler::Error> {
    let labels: Vec<String> = (0..100).map(|i| format!("row {i}")).collect();
    let mut host = ListHost::new(ListAdapter::new(labels), DefaultCellFactory::new(), ());
    host.set_viewport_rows(6);

    let mut images = DeferredImages::new();
    let mut drawables = RandomDrawables::new(StdRng::seed_from_u64(5));

    // Scroll three screens without letting any load finish.
    for first in [0, 6, 12, 18] {
        host.scroll_to_row(first);
        let pass = host.layout(&mut BindEnv::new(&mut images, &mut drawables))?;
        println!("first_row={first} {pass:?} pending={}", images.pending());
    }

    let issued = images.pending();
    let applied = images.complete_all();
    println!("issued={issued} applied={applied} dropped={}", issued - applied);

    host.for_each_attached(|row, cell| {
        let image = cell.as_item().and_then(|c| c.image().image());
        println!("{row:>3} {:<8} {image:?}", cell.text());
    });
    Ok(())
}
