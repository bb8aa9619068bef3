#![no_main]
use bitblick::{render, GroupSpec, RenderOptions};
use libfuzzer_sys::fuzz_target;

// Zeile 1: Literal, Zeile 2: Group-Spec, Zeile 3: Options-Flags.
// Die ganze Pipeline darf auf keiner Kombination panicken.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else { return };
    let mut parts = text.splitn(3, '\n');
    let literal = parts.next().unwrap_or("");
    let spec = parts.next().unwrap_or("");
    let flags = parts.next().unwrap_or("").as_bytes();

    let Ok(group) = GroupSpec::parse(spec) else { return };
    let bit = |i: usize| flags.get(i).is_some_and(|b| b & 1 == 1);

    let opts = RenderOptions::default()
        .with_group(group)
        .with_number_bits(bit(0))
        .with_reverse_numbering(bit(1))
        .with_highlight_on(bit(2))
        .with_highlight_off(bit(3))
        .with_color(bit(4))
        .with_width(flags.get(5).map(|b| *b as usize));

    let _ = render(&opts, &[literal]);
});
