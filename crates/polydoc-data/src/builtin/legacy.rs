//! Legacy data modules: every page lives under `<locale>/guide/`.

use super::links;
use crate::dataset::LocaleDataSet;

pub(super) const NAMES: &[&str] = &["en", "zh"];

pub(super) fn dataset(name: &str) -> Option<LocaleDataSet> {
    match name {
        "en" => Some(english()),
        "zh" => Some(chinese()),
        _ => None,
    }
}

fn english() -> LocaleDataSet {
    LocaleDataSet::new("/en/")
        .with_topic(
            "guide",
            links(&[
                ("What is yalantinglibs?", "/en/guide/what-is-yalantinglibs"),
                ("Use as Git Submodule", "/en/guide/how-to-use-as-git-submodule"),
                (
                    "Use by CMake find_package",
                    "/en/guide/how-to-use-by-cmake-find_package",
                ),
            ]),
        )
        .with_topic(
            "struct_pack",
            links(&[
                ("What is struct_pack?", "/en/guide/struct-pack-intro"),
                ("struct_pack layout", "/en/guide/struct-pack-layout"),
                ("struct_pack type system", "/en/guide/struct-pack-type-system"),
                (
                    "API Reference",
                    "https://alibaba.github.io/yalantinglibs/html/group__struct__pack.html",
                ),
            ]),
        )
        .with_topic(
            "struct_pb",
            links(&[
                ("What is struct_pb?", "/en/guide/struct-pb-intro"),
                ("Quick Start", "/en/guide/struct-pb-quick-start"),
                ("Supported Features", "/en/guide/struct-pb-supported-features"),
                ("Guide (proto3)", "/en/guide/struct-pb-guide-proto3"),
                (
                    "Generating your struct",
                    "/en/guide/struct-pb-generating-your-struct",
                ),
                ("struct_pb API", "/en/guide/struct-pb-api"),
            ]),
        )
        .with_topic(
            "coro_rpc",
            links(&[("What is coro_rpc?", "/en/guide/coro-rpc-intro")]),
        )
}

fn chinese() -> LocaleDataSet {
    LocaleDataSet::new("/zh/")
        .with_topic(
            "guide",
            links(&[("雅兰亭库简介", "/zh/guide/what-is-yalantinglibs")]),
        )
        .with_topic(
            "struct_pack",
            links(&[
                ("struct_pack简介", "/zh/guide/struct-pack-intro"),
                ("struct_pack类型系统", "/zh/guide/struct-pack-type-system"),
                ("struct_pack布局", "/zh/guide/struct-pack-layout"),
                (
                    "API Reference",
                    "https://alibaba.github.io/yalantinglibs/cn/html/group__struct__pack.html",
                ),
            ]),
        )
        .with_topic(
            "coro_rpc",
            links(&[("coro_rpc简介", "/zh/guide/coro-rpc-intro")]),
        )
}
