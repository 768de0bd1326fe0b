//! Fuzz target for cursor position report parsing.

#![no_main]

use kilo::terminal::{CursorReport, REPORT_BUFFER_LEN, read_report};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut input = data;
    let reply = read_report(&mut input).expect("slice reads never fail");
    assert!(reply.len() < REPORT_BUFFER_LEN);

    if let Ok(report) = CursorReport::parse(&reply) {
        assert!(report.row > 0 && report.col > 0);
        assert_eq!(reply.last(), Some(&b'R'));
    }
});
