#![no_main]

use dotname::{QualifiedTypeName, TypeNameBuilder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(name) = QualifiedTypeName::parse(text) else {
        return;
    };

    let rendered = TypeNameBuilder::new(&name)
        .include_assembly_name(true)
        .build()
        .expect("parsed trees always render");
    let reparsed = QualifiedTypeName::parse(&rendered).expect("rendered names parse");
    let rerendered = TypeNameBuilder::new(&reparsed)
        .include_assembly_name(true)
        .build()
        .expect("parsed trees always render");

    assert_eq!(rendered, rerendered);
});
