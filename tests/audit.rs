//! Coverage audit over a text listing.

use std::io::Write;

use esmconv::audit::parse_line;
use esmconv::{CodecError, CoverageReport, Signature};

const LISTING: &str = "\
# record sig payload
REFR NAME 00012345
REFR DATA 3f800000400000004040000000000000000000003f000000

NPC_ EDID 4869746d616e00
ZZZZ QQQQ 01020304
ZZZZ QQQQ
PERK DATA 0102030400
";

#[test]
fn report_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(LISTING.as_bytes()).expect("write");
    let report = CoverageReport::from_path(file.path()).expect("audit");
    assert_eq!(report.total, 6);
    assert_eq!(report.converted, 4);
    assert_eq!(report.no_schema_total(), 2);
    let key = (Signature::parse("ZZZZ").expect("tag"), Signature::parse("QQQQ").expect("tag"));
    assert_eq!(report.no_schema.get(&key), Some(&2));
    // Nothing in this process enables fallback counting.
    assert!(report.fallbacks.is_empty());

    let text = report.to_string();
    assert!(text.starts_with("6 subrecords, 4 converted, 2 without schema"));
    assert!(text.contains("no schema  ZZZZ QQQQ  x2"));
}

#[test]
fn malformed_lines_report_line_number() {
    let listing = "REFR NAME 00012345\nREFR NAME zz\n";
    match CoverageReport::from_reader(listing.as_bytes()) {
        Err(CodecError::Parse { line, message }) => {
            assert_eq!(line, 2);
            assert!(message.starts_with("bad payload"), "{message}");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn line_grammar() {
    assert_eq!(parse_line(1, "   ").expect("blank"), None);
    assert_eq!(parse_line(1, "# note").expect("comment"), None);
    let entry = parse_line(1, "LAND ATXT 0001020302000005").expect("ok").expect("entry");
    assert_eq!(entry.record_type, Signature::parse("LAND").expect("tag"));
    assert_eq!(entry.payload.len(), 8);
    assert!(matches!(parse_line(3, "REFR"), Err(CodecError::Parse { line: 3, .. })));
    assert!(matches!(parse_line(4, "REFRX NAME 00"), Err(CodecError::Parse { line: 4, .. })));
    assert!(matches!(parse_line(5, "REFR NAME 00 extra"), Err(CodecError::Parse { line: 5, .. })));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = CoverageReport::from_path(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, CodecError::Io(_)));
}
