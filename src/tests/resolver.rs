use crate::filter::{FilterList, FlagValue};
use crate::platform::default_catalog;
use crate::resolver::PlatformFilter;
use crate::tests::common::platforms;

fn filter(os: &[&str], arch: &[&str]) -> PlatformFilter {
    PlatformFilter {
        os: os.iter().copied().collect::<FilterList>(),
        arch: arch.iter().copied().collect::<FilterList>(),
        ..PlatformFilter::default()
    }
}

#[test]
fn includes_build_a_new_list() {
    let supported = platforms(&[("foo", "baz"), ("bar", "baz"), ("boo", "bop")]);
    let f = filter(&["foo", "bar"], &["baz"]);
    assert_eq!(f.platforms(&supported), platforms(&[("foo", "baz"), ("bar", "baz")]));
}

#[test]
fn os_includes_without_arch() {
    let supported = platforms(&[("foo", "baz"), ("bar", "baz"), ("boo", "bop")]);
    let f = filter(&["foo", "bar"], &[]);
    assert_eq!(f.platforms(&supported), platforms(&[("foo", "baz"), ("bar", "baz")]));
}

#[test]
fn excludes_skip_platforms() {
    let supported = platforms(&[("foo", "bar"), ("foo", "baz"), ("bar", "bar")]);
    let f = filter(&["!foo"], &[]);
    assert_eq!(f.platforms(&supported), platforms(&[("bar", "bar")]));
}

#[test]
fn os_only_keeps_catalog_order() {
    let supported = platforms(&[("foo", "bar"), ("foo", "baz"), ("bar", "bar")]);
    let f = filter(&["foo"], &[]);
    assert_eq!(f.platforms(&supported), platforms(&[("foo", "bar"), ("foo", "baz")]));
}

#[test]
fn arch_only_keeps_catalog_order() {
    let supported = platforms(&[("foo", "bar"), ("foo", "baz"), ("bar", "bar")]);
    let f = filter(&[], &["bar"]);
    assert_eq!(f.platforms(&supported), platforms(&[("foo", "bar"), ("bar", "bar")]));
}

#[test]
fn includes_with_some_skips() {
    let supported =
        platforms(&[("foo", "bar"), ("foo", "baz"), ("bar", "baz"), ("baz", "bar")]);
    let f = filter(&["foo", "bar", "!foo"], &["baz"]);
    assert_eq!(f.platforms(&supported), platforms(&[("bar", "baz")]));
}

#[test]
fn unsupported_pairs_are_dropped() {
    let supported = platforms(&[("foo", "baz")]);
    let f = filter(&["foo", "bar"], &["baz"]);
    assert_eq!(f.platforms(&supported), platforms(&[("foo", "baz")]));
    assert_eq!(f.unsupported(&supported), platforms(&[("bar", "baz")]));
}

#[test]
fn cartesian_product_follows_filter_order() {
    let supported = platforms(&[("a", "x"), ("a", "y"), ("b", "x"), ("b", "y")]);
    let f = filter(&["b", "a"], &["y", "x"]);
    assert_eq!(
        f.platforms(&supported),
        platforms(&[("b", "y"), ("b", "x"), ("a", "y"), ("a", "x")])
    );
}

#[test]
fn arch_exclusion_applies_to_os_inclusion() {
    let supported = platforms(&[("linux", "386"), ("linux", "amd64"), ("windows", "386")]);
    let f = filter(&["linux"], &["!386"]);
    assert_eq!(f.platforms(&supported), platforms(&[("linux", "amd64")]));
}

#[test]
fn no_matches_is_empty_not_an_error() {
    let supported = platforms(&[("foo", "bar")]);
    assert!(filter(&["nope"], &[]).platforms(&supported).is_empty());
    assert!(filter(&[], &["!bar"]).platforms(&supported).is_empty());
    assert!(filter(&[], &[]).platforms(&[]).is_empty());
}

#[test]
fn empty_filters_return_the_whole_catalog() {
    let supported = default_catalog();
    assert_eq!(PlatformFilter::new().platforms(&supported), supported);

    let reversed: Vec<_> = supported.iter().rev().cloned().collect();
    assert_eq!(PlatformFilter::new().platforms(&reversed), reversed);
}

#[test]
fn only_exclusions_start_from_the_whole_catalog() {
    let supported = platforms(&[("foo", "bar"), ("foo", "baz"), ("bar", "bar")]);
    let f = filter(&["!bar"], &["!baz"]);
    assert_eq!(f.platforms(&supported), platforms(&[("foo", "bar")]));
}

#[test]
fn pair_inclusions_alone_select_only_those_pairs() {
    let supported = platforms(&[("linux", "amd64"), ("linux", "arm64"), ("darwin", "arm64")]);
    let mut f = PlatformFilter::new();
    f.os_arch_value().set("darwin/arm64 plan9/386").unwrap();
    assert_eq!(f.platforms(&supported), platforms(&[("darwin", "arm64")]));
    assert_eq!(f.unsupported(&supported), platforms(&[("plan9", "386")]));
}

#[test]
fn pair_inclusions_extend_os_inclusions() {
    let supported = platforms(&[("linux", "amd64"), ("linux", "arm64"), ("darwin", "arm64")]);
    let mut f = PlatformFilter::new();
    f.os_value().set("linux").unwrap();
    f.os_arch_value().set("darwin/arm64 linux/amd64").unwrap();
    assert_eq!(
        f.platforms(&supported),
        platforms(&[("linux", "amd64"), ("linux", "arm64"), ("darwin", "arm64")])
    );
}

#[test]
fn pair_exclusions_remove_single_platforms() {
    let supported = platforms(&[("linux", "amd64"), ("linux", "arm64"), ("darwin", "arm64")]);
    let mut f = PlatformFilter::new();
    f.os_arch_value().set("!linux/arm64").unwrap();
    assert_eq!(
        f.platforms(&supported),
        platforms(&[("linux", "amd64"), ("darwin", "arm64")])
    );
}

#[test]
fn accumulated_flags_resolve_case_insensitively() {
    let supported = default_catalog();
    let mut f = PlatformFilter::new();
    f.os_value().set("LINUX Windows").unwrap();
    f.arch_value().set("AMD64").unwrap();
    f.arch_value().set("arm64 !ARM64").unwrap();
    assert_eq!(
        f.platforms(&supported),
        platforms(&[("linux", "amd64"), ("windows", "amd64")])
    );
}
