// Example: driving the adapter by hand, the way a host would.
use rand::SeedableRng;
use rand::rngs::StdRng;
use recycler::{
    BindEnv, DefaultCellFactory, DrawableId, DrawablePool, ImageProvider, ImageRequest,
    ListAdapter, RowKind, sample,
};

struct Cycle(u32);

impl DrawablePool for Cycle {
    fn pick_random(&mut self) -> DrawableId {
        self.0 = self.0 % 5 + 1;
        DrawableId(self.0)
    }
}

struct Instant;

impl ImageProvider for Instant {
    fn load_into(&mut self, request: ImageRequest) {
        request.deliver();
    }
}

fn main() -> Result<(), recycler::Error> {
    let mut rng = StdRng::seed_from_u64(2015);
    let labels = sample(&["Brie", "Comte", "Gouda", "Stilton"], 6, &mut rng)?;
    let adapter = ListAdapter::new(labels);
    println!("row_count={}", adapter.row_count());

    let mut factory = DefaultCellFactory::new();
    let mut images = Instant;
    let mut drawables = Cycle(0);
    let mut env = BindEnv::new(&mut images, &mut drawables);

    // One cell per kind, rebound for every row of that kind.
    let mut cells = RowKind::ALL.map(|kind| adapter.create_cell(kind, &mut factory, &()));
    for row in 0..adapter.row_count() {
        let cell = &mut cells[adapter.kind_of(row).as_index()];
        adapter.bind(cell, row, &mut env)?;
        let image = cell.as_item().and_then(|c| c.image().image());
        println!(
            "row={row} kind={} cell={} text={:?} image={image:?}",
            cell.kind(),
            cell.id().0,
            cell.text()
        );
    }

    println!("value_at(1)={:?}", adapter.value_at(1)?);
    println!("value_at(0)={}", adapter.value_at(0).unwrap_err());
    Ok(())
}
