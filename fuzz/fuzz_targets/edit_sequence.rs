#![no_main]

use field_core::{FieldId, InputKind, MaskedValueStore, SelectionRange, StoreOptions};
use libfuzzer_sys::fuzz_target;

const INPUT_TYPES: [Option<&str>; 8] = [
    Some("insertText"),
    Some("insertFromPaste"),
    Some("deleteContentBackward"),
    Some("deleteContentForward"),
    Some("deleteByCut"),
    Some("deleteWordBackward"),
    Some("formatBold"),
    None,
];

// Each record is three bytes: opcode, then two operands. Data for inserts is
// carved from the tail of the input.
fuzz_target!(|bytes: &[u8]| {
    let id = FieldId::from_raw(1);
    let mut store = MaskedValueStore::with_options(StoreOptions {
        single_line: bytes.first().is_some_and(|b| b & 1 == 1),
        ..StoreOptions::default()
    });
    store.ensure_initial(id, String::new());

    let (ops, data) = bytes.split_at(bytes.len() / 2);
    let data = String::from_utf8_lossy(data);
    let data: Vec<char> = data.chars().collect();

    for record in ops.chunks_exact(3) {
        let [op, a, b] = [record[0], record[1], record[2]];
        let len = store.get(id).map_or(0, |v| v.chars().count());
        if op & 0x80 != 0 {
            // Selections may be out of range; the store clamps them.
            store.capture_selection(id, SelectionRange::new(a as usize, b as usize));
            continue;
        }

        let input_type = INPUT_TYPES[(op as usize) % INPUT_TYPES.len()];
        let take = (b as usize % 4).min(data.len());
        let offset = if data.is_empty() { 0 } else { a as usize % data.len() };
        let text: String = data.iter().cycle().skip(offset).take(take).collect();

        let outcome = store.apply_input(id, InputKind::parse(input_type), Some(&text));

        let value = store.get(id).unwrap_or_default();
        let masked = store.masked(id).unwrap_or_default();
        let new_len = value.chars().count();
        assert_eq!(outcome.value, value);
        assert_eq!(masked.chars().count(), new_len);
        assert!(masked.chars().all(|c| c == '*'));
        assert!(outcome.caret <= new_len);
        assert!(new_len <= len + take);
        assert_eq!(store.selection(id), Some(SelectionRange::collapsed(outcome.caret)));
    }
});
