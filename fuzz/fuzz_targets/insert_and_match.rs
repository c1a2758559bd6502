#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<(String, i32)>, Vec<(String, i32)>, String)| {
    let mut first = segmatch::Node::new();
    for (key, item) in data.0 {
        first.insert(key, item);
    }

    let mut second = segmatch::Node::new();
    for (key, item) in data.1 {
        second.insert(key, item);
    }

    let _ = first.at(&data.2);
    let _ = first.merge(second).at(&data.2);
});
