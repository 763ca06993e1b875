use std::borrow::Cow;

use pretty_assertions::assert_eq;

use crate::assemble::Fragment;
use crate::encoding::{Encoding, Text};
use crate::pattern::{PatternBuilder, Target, compile, retrieve};
use crate::syntax::Syntax;
use crate::Error;

fn abc_fragments() -> Vec<Fragment> {
    vec![
        Fragment::named("a", "x"),
        Fragment::new("y"),
        Fragment::named("b", "z"),
    ]
}

#[test]
fn named_fragments_become_named_groups() {
    let pattern = compile(&abc_fragments(), "", "auto", "ruby").unwrap();
    assert_eq!(pattern.pattern(), "(x)y(z)");
    assert_eq!(pattern.group_count(), 2);
    assert_eq!(
        pattern.group_names(),
        Some(&[Some("a".to_string()), Some("b".to_string())][..])
    );
}

#[test]
fn group_count_equals_named_fragment_count() {
    let fragments = vec![
        Fragment::named("one", "a"),
        Fragment::new("b"),
        Fragment::named("two", "c"),
        Fragment::named("three", "d"),
    ];
    let pattern = compile(&fragments, "", "auto", "ruby").unwrap();
    assert_eq!(pattern.group_count(), 3);
}

#[test]
fn duplicate_fragment_names_fill_every_slot() {
    let fragments = vec![Fragment::named("g", "x"), Fragment::named("g", "y")];
    let pattern = compile(&fragments, "", "auto", "ruby").unwrap();
    assert_eq!(
        pattern.group_names(),
        Some(&[Some("g".to_string()), Some("g".to_string())][..])
    );
}

#[test]
fn unnamed_groups_have_no_mapping() {
    let pattern = compile(&[Fragment::new("(x)(y)")], "", "auto", "ruby").unwrap();
    assert_eq!(pattern.group_count(), 2);
    assert_eq!(pattern.group_names(), None);
}

#[test]
fn engine_named_groups_are_extracted() {
    let pattern = compile(
        &[Fragment::new(r"(?<year>\d{4})-(\d{2})")],
        "",
        "auto",
        "ruby",
    )
    .unwrap();
    assert_eq!(pattern.group_count(), 2);
    assert_eq!(
        pattern.group_names(),
        Some(&[Some("year".to_string()), None][..])
    );
}

#[test]
fn fragment_names_and_engine_names_combine() {
    let fragments = vec![Fragment::named("date", r"(?<year>\d{4})-\d{2}")];
    let pattern = compile(&fragments, "", "auto", "ruby").unwrap();
    // The wrapping group is 1, the engine-named group nested in it is 2.
    assert_eq!(pattern.group_count(), 2);
    assert_eq!(
        pattern.group_names(),
        Some(&[Some("date".to_string()), Some("year".to_string())][..])
    );
}

#[test]
fn fragment_groups_shift_numbering() {
    let fragments = vec![
        Fragment::new(r"(\d)"),
        Fragment::named("word", r"(\w)\w*"),
    ];
    let pattern = compile(&fragments, "", "auto", "ruby").unwrap();
    // Groups: 1 = leading unnamed, 2 = wrapper of the named fragment,
    // 3 = nested unnamed inside it.
    assert_eq!(pattern.group_count(), 3);
    assert_eq!(
        pattern.group_names(),
        Some(&[None, Some("word".to_string()), None][..])
    );
}

#[test]
fn malformed_pattern_reports_engine_diagnostics() {
    let err = compile(&[Fragment::new("(unclosed")], "", "auto", "ruby").unwrap_err();
    match err {
        Error::Compile(message) => assert!(!message.is_empty()),
        other => panic!("expected compile error, got {other:?}"),
    }
}

#[test]
fn bogus_syntax_is_rejected() {
    let err = compile(&[Fragment::new("x")], "", "auto", "bogus").unwrap_err();
    assert!(matches!(err, Error::InvalidSyntax(name) if name == "bogus"));
}

#[test]
fn empty_fragments_are_rejected() {
    assert!(matches!(
        compile(&[], "", "auto", "ruby"),
        Err(Error::EmptyPattern)
    ));
}

#[test]
fn fixed_syntax_is_literal() {
    let pattern = compile(&[Fragment::new("a.b")], "", "auto", "fixed").unwrap();
    let engine = pattern.engine().unwrap();
    assert!(engine.is_match("xa.by"));
    assert!(!engine.is_match("xaXby"));
    assert_eq!(pattern.group_count(), 0);
    assert_eq!(pattern.syntax(), Syntax::Fixed);
}

#[test]
fn fixed_syntax_literalizes_assembler_parentheses() {
    let pattern = compile(&[Fragment::named("lit", "a+")], "", "auto", "fixed").unwrap();
    assert_eq!(pattern.group_count(), 0);
    assert_eq!(pattern.group_names(), None);
    assert!(pattern.engine().unwrap().is_match("(a+)"));
}

#[test]
fn case_insensitive_flag_affects_matching() {
    let pattern = compile(&[Fragment::new("abc")], "i", "auto", "ruby").unwrap();
    assert!(pattern.engine().unwrap().is_match("ABC"));
    assert_eq!(pattern.options(), "i");
}

#[test]
fn multiline_flag_affects_anchors() {
    let pattern = compile(&[Fragment::new("^b$")], "m", "auto", "ruby").unwrap();
    assert!(pattern.engine().unwrap().is_match("a\nb\nc"));

    let strict = compile(&[Fragment::new("^b$")], "", "auto", "ruby").unwrap();
    assert!(!strict.engine().unwrap().is_match("a\nb\nc"));
}

#[test]
fn unknown_flags_are_tolerated() {
    let pattern = compile(&[Fragment::new("abc")], "zi!", "auto", "ruby").unwrap();
    assert!(pattern.engine().unwrap().is_match("ABC"));
}

#[test]
fn explicit_encoding_resolves_case_insensitively() {
    let a = compile(&[Fragment::new("x")], "", "UTF8", "ruby").unwrap();
    let b = compile(&[Fragment::new("x")], "", "utf-8", "ruby").unwrap();
    assert_eq!(a.encoding(), Encoding::Utf8);
    assert_eq!(a.encoding(), b.encoding());
    assert_eq!(a.encoding().label(), "UTF-8");
}

#[test]
fn auto_encoding_takes_the_first_fragment() {
    let fragments = vec![
        Fragment::new("x").with_encoding(Encoding::Latin1),
        Fragment::new("y").with_encoding(Encoding::Utf8),
    ];
    let pattern = compile(&fragments, "", "auto", "ruby").unwrap();
    assert_eq!(pattern.encoding(), Encoding::Latin1);
}

#[test]
fn unrecognized_encoding_is_unknown() {
    let pattern = compile(&[Fragment::new("x")], "", "ebcdic", "ruby").unwrap();
    assert_eq!(pattern.encoding().label(), "unknown");
}

#[test]
fn utf8_classes_match_across_scripts() {
    let pattern = compile(&[Fragment::new(r"^\w+$")], "", "utf8", "ruby").unwrap();
    assert!(pattern.engine().unwrap().is_match("héllo"));

    let ascii = compile(&[Fragment::new(r"^\w+$")], "", "latin1", "ruby").unwrap();
    assert!(!ascii.engine().unwrap().is_match("héllo"));
}

#[test]
fn release_is_idempotent() {
    let mut pattern = compile(&[Fragment::new("x")], "", "auto", "ruby").unwrap();
    assert!(!pattern.is_released());
    pattern.release();
    assert!(pattern.is_released());
    pattern.release(); // second release is a no-op
    assert!(pattern.is_released());
}

#[test]
fn engine_access_after_release_fails_fast() {
    let mut pattern = compile(&[Fragment::new("x")], "", "auto", "ruby").unwrap();
    pattern.release();
    assert!(matches!(pattern.engine(), Err(Error::UseAfterRelease)));
}

#[test]
fn metadata_survives_release() {
    let mut pattern = compile(&abc_fragments(), "i", "utf8", "ruby").unwrap();
    pattern.release();
    assert_eq!(pattern.pattern(), "(x)y(z)");
    assert_eq!(pattern.options(), "i");
    assert_eq!(pattern.group_count(), 2);
    assert_eq!(pattern.encoding(), Encoding::Utf8);
    assert_eq!(pattern.syntax(), Syntax::Ruby);
}

#[test]
fn recompilation_yields_identical_metadata() {
    let a = compile(&abc_fragments(), "mi", "utf8", "ruby").unwrap();
    let b = compile(&abc_fragments(), "mi", "utf8", "ruby").unwrap();
    assert_eq!(a.pattern(), b.pattern());
    assert_eq!(a.options(), b.options());
    assert_eq!(a.group_count(), b.group_count());
    assert_eq!(a.group_names(), b.group_names());
    assert_eq!(a.encoding().label(), b.encoding().label());
}

#[test]
fn retrieve_borrows_compiled_patterns() {
    let pattern = compile(&[Fragment::new("x")], "", "auto", "ruby").unwrap();
    let retrieved = retrieve(Target::Compiled(&pattern), &[]).unwrap();
    assert!(matches!(retrieved, Cow::Borrowed(_)));
}

#[test]
fn retrieve_compiles_plain_text_with_subject_encoding() {
    let subject = [
        Text::new("plain"),
        Text::new("résumé").with_encoding(Encoding::Utf8),
    ];
    let retrieved = retrieve(Target::Text(r"\w+"), &subject).unwrap();
    assert_eq!(retrieved.encoding(), Encoding::Utf8);
    assert_eq!(retrieved.syntax(), Syntax::Ruby);
    assert_eq!(retrieved.options(), "");
    assert!(retrieved.engine().unwrap().is_match("résumé"));
}

#[test]
fn builder_defaults() {
    let pattern = PatternBuilder::new(vec![Fragment::new("x")])
        .build()
        .unwrap();
    assert_eq!(pattern.syntax(), Syntax::Ruby);
    assert_eq!(pattern.options(), "");
    assert_eq!(pattern.encoding(), Encoding::Unspecified);
}
