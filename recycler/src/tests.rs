use crate::*;

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Default)]
struct QueuedImages {
    pending: Vec<ImageRequest>,
}

impl ImageProvider for QueuedImages {
    fn load_into(&mut self, request: ImageRequest) {
        self.pending.push(request);
    }
}

/// Hands out drawables 0, 1, 2, .. in order.
#[derive(Default)]
struct CountingDrawables(u32);

impl DrawablePool for CountingDrawables {
    fn pick_random(&mut self) -> DrawableId {
        let id = DrawableId(self.0);
        self.0 += 1;
        id
    }
}

#[derive(Default)]
struct Recorder {
    messages: Vec<String>,
    opened: Vec<String>,
}

impl Notifier for Recorder {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

impl Navigator for Recorder {
    fn open_detail(&mut self, name: &str) {
        self.opened.push(name.to_string());
    }
}

fn abc() -> ListAdapter<&'static str> {
    ListAdapter::new(vec!["A", "B", "C"])
}

fn bind(
    adapter: &ListAdapter<&'static str>,
    cell: &mut Cell,
    row: usize,
    images: &mut QueuedImages,
    drawables: &mut CountingDrawables,
) -> Result<(), Error> {
    let mut env = BindEnv::new(images, drawables);
    adapter.bind(cell, row, &mut env)
}

#[test]
fn three_items_scenario() {
    let adapter = abc();
    assert_eq!(adapter.row_count(), 5);
    assert_eq!(adapter.kind_of(0), RowKind::Header);
    for row in 1..=3 {
        assert_eq!(adapter.kind_of(row), RowKind::Item);
    }
    assert_eq!(adapter.kind_of(4), RowKind::Footer);
    assert_eq!(adapter.value_at(2), Ok(&"B"));
}

#[test]
fn empty_collection_still_has_header_and_footer() {
    let adapter = ListAdapter::<String>::new(Vec::new());
    assert_eq!(adapter.row_count(), 2);
    assert_eq!(adapter.kind_of(0), RowKind::Header);
    assert_eq!(adapter.kind_of(1), RowKind::Footer);

    assert_eq!(
        adapter.value_at(0),
        Err(Error::NotAnItem {
            row: 0,
            kind: RowKind::Header
        })
    );
    assert_eq!(
        adapter.value_at(1),
        Err(Error::NotAnItem {
            row: 1,
            kind: RowKind::Footer
        })
    );
    let err = adapter.value_at(2).unwrap_err();
    assert_eq!(err, Error::RowOutOfRange { row: 2, row_count: 2 });
    assert!(err.is_contract_violation());
}

#[test]
fn row_checks_range_and_reports_item_index() {
    let adapter = abc();
    assert_eq!(adapter.row(0), Ok(Row::Header));
    assert_eq!(adapter.row(1), Ok(Row::Item(0)));
    assert_eq!(adapter.row(3), Ok(Row::Item(2)));
    assert_eq!(adapter.row(4), Ok(Row::Footer));
    assert_eq!(
        adapter.row(5),
        Err(Error::RowOutOfRange { row: 5, row_count: 5 })
    );
    assert_eq!(Row::Item(2).item_index(), Some(2));
    assert_eq!(Row::Footer.item_index(), None);
}

#[test]
fn create_cell_dispatches_on_kind() {
    let adapter = abc();
    let mut factory = DefaultCellFactory::new();
    for kind in RowKind::ALL {
        let cell = adapter.create_cell(kind, &mut factory, &());
        assert_eq!(cell.kind(), kind);
        assert!(cell.on_click().is_none());
        assert_eq!(cell.text(), "");
    }
    assert_eq!(factory.created(), 3);
}

#[test]
fn header_and_footer_bind_labels_and_messages() {
    let adapter = abc();
    let mut factory = DefaultCellFactory::new();
    let mut images = QueuedImages::default();
    let mut drawables = CountingDrawables::default();

    let mut header = adapter.create_cell(RowKind::Header, &mut factory, &());
    let mut footer = adapter.create_cell(RowKind::Footer, &mut factory, &());
    bind(&adapter, &mut header, 0, &mut images, &mut drawables).unwrap();
    bind(&adapter, &mut footer, 4, &mut images, &mut drawables).unwrap();

    assert_eq!(header.text(), "Header View");
    assert_eq!(footer.text(), "Footer View");
    assert!(images.pending.is_empty());

    let mut rec = Recorder::default();
    let mut nav = Recorder::default();
    assert!(header.click(&mut rec, &mut nav));
    assert!(footer.click(&mut rec, &mut nav));
    assert_eq!(
        rec.messages,
        vec!["You clicked at Header View!", "You clicked at Footer View"]
    );
    assert!(nav.opened.is_empty());
}

#[test]
fn item_bind_sets_label_handler_and_issues_image_load() {
    let adapter = abc();
    let mut factory = DefaultCellFactory::new();
    let mut images = QueuedImages::default();
    let mut drawables = CountingDrawables(7);

    let mut cell = adapter.create_cell(RowKind::Item, &mut factory, &());
    bind(&adapter, &mut cell, 2, &mut images, &mut drawables).unwrap();

    assert_eq!(cell.bound_label(), Some("B"));
    assert_eq!(cell.text(), "B");
    assert_eq!(cell.on_click(), Some(&Interaction::OpenDetail("B".to_string())));

    assert_eq!(images.pending.len(), 1);
    let request = images.pending.pop().unwrap();
    assert_eq!(request.source, DrawableId(7));
    assert_eq!(request.fit, FitMode::FitCenter);
    assert!(request.deliver());
    assert_eq!(cell.as_item().unwrap().image().image(), Some(DrawableId(7)));

    let mut notifier = Recorder::default();
    let mut navigator = Recorder::default();
    assert!(cell.click(&mut notifier, &mut navigator));
    assert_eq!(navigator.opened, vec!["B"]);
    assert!(notifier.messages.is_empty());
}

#[test]
fn rebinding_a_recycled_item_cell_replaces_the_label() {
    let items: Vec<String> = (0..10).map(|i| alloc::format!("item-{i}")).collect();
    let adapter = ListAdapter::new(items);
    let mut factory = DefaultCellFactory::new();
    let mut images = QueuedImages::default();
    let mut drawables = CountingDrawables::default();
    let mut env = BindEnv::new(&mut images, &mut drawables);

    let mut cell = adapter.create_cell(RowKind::Item, &mut factory, &());
    adapter.bind(&mut cell, 3, &mut env).unwrap();
    assert_eq!(cell.bound_label(), Some("item-2"));

    adapter.bind(&mut cell, 7, &mut env).unwrap();
    assert_eq!(cell.bound_label(), Some("item-6"));
    assert_eq!(cell.text(), "item-6");
    assert_eq!(
        cell.on_click(),
        Some(&Interaction::OpenDetail("item-6".to_string()))
    );
}

#[test]
fn stale_image_load_is_discarded_after_rebind() {
    let adapter = abc();
    let mut factory = DefaultCellFactory::new();
    let mut images = QueuedImages::default();
    let mut drawables = CountingDrawables::default();

    let mut cell = adapter.create_cell(RowKind::Item, &mut factory, &());
    bind(&adapter, &mut cell, 1, &mut images, &mut drawables).unwrap();
    bind(&adapter, &mut cell, 3, &mut images, &mut drawables).unwrap();

    let second = images.pending.pop().unwrap();
    let first = images.pending.pop().unwrap();
    assert!(!first.target.is_current());
    assert!(second.target.is_current());

    // Complete the current load first, then let the stale one arrive late.
    assert!(second.deliver());
    assert!(!first.deliver());

    let slot = cell.as_item().unwrap().image();
    assert_eq!(slot.image(), Some(DrawableId(1)));
    assert_eq!(slot.generation(), 2);
}

#[test]
fn rebind_blanks_the_previous_image() {
    let adapter = abc();
    let mut factory = DefaultCellFactory::new();
    let mut images = QueuedImages::default();
    let mut drawables = CountingDrawables::default();

    let mut cell = adapter.create_cell(RowKind::Item, &mut factory, &());
    bind(&adapter, &mut cell, 1, &mut images, &mut drawables).unwrap();
    assert!(images.pending.pop().unwrap().deliver());
    assert_eq!(cell.as_item().unwrap().image().image(), Some(DrawableId(0)));

    bind(&adapter, &mut cell, 2, &mut images, &mut drawables).unwrap();
    assert_eq!(cell.as_item().unwrap().image().image(), None);
}

#[test]
fn failed_image_load_leaves_slot_blank() {
    let adapter = abc();
    let mut factory = DefaultCellFactory::new();
    let mut images = QueuedImages::default();
    let mut drawables = CountingDrawables::default();

    let mut cell = adapter.create_cell(RowKind::Item, &mut factory, &());
    bind(&adapter, &mut cell, 1, &mut images, &mut drawables).unwrap();
    assert!(images.pending.pop().unwrap().fail());
    assert_eq!(cell.as_item().unwrap().image().image(), None);
}

#[test]
fn image_load_can_complete_on_another_thread() {
    let adapter = abc();
    let mut factory = DefaultCellFactory::new();
    let mut images = QueuedImages::default();
    let mut drawables = CountingDrawables(4);

    let mut cell = adapter.create_cell(RowKind::Item, &mut factory, &());
    bind(&adapter, &mut cell, 1, &mut images, &mut drawables).unwrap();
    let request = images.pending.pop().unwrap();

    let applied = std::thread::spawn(move || request.deliver()).join().unwrap();
    assert!(applied);
    assert_eq!(cell.as_item().unwrap().image().image(), Some(DrawableId(4)));
}

#[test]
fn bind_rejects_kind_mismatch_and_out_of_range_rows() {
    let adapter = abc();
    let mut factory = DefaultCellFactory::new();
    let mut images = QueuedImages::default();
    let mut drawables = CountingDrawables::default();

    let mut header = adapter.create_cell(RowKind::Header, &mut factory, &());
    let err = bind(&adapter, &mut header, 2, &mut images, &mut drawables).unwrap_err();
    assert_eq!(
        err,
        Error::KindMismatch {
            row: 2,
            cell: RowKind::Header,
            expected: RowKind::Item
        }
    );
    assert!(err.is_contract_violation());
    assert_eq!(header.text(), "");

    let mut item = adapter.create_cell(RowKind::Item, &mut factory, &());
    assert!(matches!(
        bind(&adapter, &mut item, 4, &mut images, &mut drawables),
        Err(Error::KindMismatch {
            cell: RowKind::Item,
            expected: RowKind::Footer,
            ..
        })
    ));
    assert!(matches!(
        bind(&adapter, &mut item, 9, &mut images, &mut drawables),
        Err(Error::RowOutOfRange { row: 9, .. })
    ));
    assert!(images.pending.is_empty());
    assert!(item.bound_label().is_none());
}

#[test]
fn unbound_cell_ignores_clicks() {
    let cell = Cell::Item(ItemCell::new(CellId(1)));
    let mut rec = Recorder::default();
    let mut nav = Recorder::default();
    assert!(!cell.click(&mut rec, &mut nav));
    assert!(rec.messages.is_empty() && nav.opened.is_empty());
}

#[test]
fn custom_options_flow_into_binds() {
    let options = AdapterOptions::new()
        .with_header("Cheeses", "header!")
        .with_footer("The end", "footer!")
        .with_fit(FitMode::CenterCrop);
    let adapter = ListAdapter::with_options(vec!["A"], options);
    let mut factory = DefaultCellFactory::new();
    let mut images = QueuedImages::default();
    let mut drawables = CountingDrawables::default();

    let mut header = adapter.create_cell(RowKind::Header, &mut factory, &());
    bind(&adapter, &mut header, 0, &mut images, &mut drawables).unwrap();
    assert_eq!(header.text(), "Cheeses");
    assert_eq!(header.on_click(), Some(&Interaction::Notify("header!".to_string())));

    let mut footer = adapter.create_cell(RowKind::Footer, &mut factory, &());
    bind(&adapter, &mut footer, 2, &mut images, &mut drawables).unwrap();
    assert_eq!(footer.text(), "The end");

    let mut item = adapter.create_cell(RowKind::Item, &mut factory, &());
    bind(&adapter, &mut item, 1, &mut images, &mut drawables).unwrap();
    assert_eq!(images.pending[0].fit, FitMode::CenterCrop);
}

#[test]
fn sample_zero_is_empty_even_for_empty_source() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(sample::<u8, _>(&[], 0, &mut rng), Ok(Vec::new()));
    assert_eq!(sample(&[1, 2, 3], 0, &mut rng), Ok(Vec::new()));
}

#[test]
fn sample_from_empty_source_is_invalid_argument() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = sample::<u8, _>(&[], 3, &mut rng).unwrap_err();
    assert_eq!(err, Error::EmptySource { count: 3 });
    assert!(err.is_invalid_argument());
    assert!(!err.is_contract_violation());
}

#[test]
fn sample_is_reproducible_with_a_seed_and_picks_with_replacement() {
    let source = ["only"];
    let mut rng = StdRng::seed_from_u64(9);
    assert_eq!(sample(&source, 4, &mut rng).unwrap(), vec!["only"; 4]);

    let source: Vec<u32> = (0..5).collect();
    let a = sample(&source, 50, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = sample(&source, 50, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);
    // 50 picks out of 5 values must repeat.
    let mut sorted = a.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert!(sorted.len() < a.len());
}

#[cfg(feature = "std")]
#[test]
fn sample_with_thread_rng_does_not_error() {
    let source = ["a", "b", "c"];
    for _ in 0..10 {
        assert_eq!(sample_thread_rng(&source, 5).unwrap().len(), 5);
    }
}

#[test]
fn row_range_basics() {
    let r = RowRange::new(3, 7);
    assert_eq!(r.len(), 4);
    assert!(r.contains(3) && r.contains(6) && !r.contains(7));
    assert_eq!(r.iter().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
    assert!(RowRange::new(5, 2).is_empty());
}

#[test]
fn error_messages_name_the_row() {
    let msg = Error::NotAnItem {
        row: 0,
        kind: RowKind::Header,
    }
    .to_string();
    assert_eq!(msg, "row 0 is the header row and carries no item");
}

proptest! {
    #[test]
    fn row_count_is_items_plus_two(n in 0usize..500) {
        let adapter = ListAdapter::new(vec!["x"; n]);
        prop_assert_eq!(adapter.row_count(), n + 2);
        prop_assert_eq!(adapter.kind_of(0), RowKind::Header);
        prop_assert_eq!(adapter.kind_of(n + 1), RowKind::Footer);
    }

    #[test]
    fn item_rows_map_to_items(items in proptest::collection::vec("[a-z]{1,8}", 0..64)) {
        let adapter = ListAdapter::new(items.clone());
        for row in 1..=items.len() {
            prop_assert_eq!(adapter.kind_of(row), RowKind::Item);
            prop_assert_eq!(adapter.value_at(row).unwrap(), &items[row - 1]);
        }
        prop_assert!(adapter.value_at(0).is_err());
        prop_assert!(adapter.value_at(items.len() + 1).is_err());
    }

    #[test]
    fn sample_draws_count_elements_from_source(
        source in proptest::collection::vec(any::<u16>(), 1..32),
        count in 0usize..128,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let out = sample(&source, count, &mut rng).unwrap();
        prop_assert_eq!(out.len(), count);
        for x in &out {
            prop_assert!(source.contains(x));
        }
    }
}
