//! Current per-topic data modules.

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
                ("Introduce YalantingLibs", "/en/guide/what_is_yalantinglibs"),
                ("Use as Git Submodule", "/en/guide/how_to_use_as_git_submodule"),
                (
                    "Use by CMake find_package",
                    "/en/guide/how_to_use_by_cmake_find_package",
                ),
            ]),
        )
        .with_topic(
            "struct_pb",
            links(&[("What is struct_pb?", "/en/struct_pb/struct_pb_intro")]),
        )
        .with_topic(
            "struct_pack",
            links(&[
                ("What is struct_pack?", "/en/struct_pack/struct_pack_intro"),
                ("struct_pack tips", "/en/struct_pack/struct_pack_tips"),
                ("struct_pack layout", "/en/struct_pack/struct_pack_layout"),
                (
                    "struct_pack type system",
                    "/en/struct_pack/struct_pack_type_system",
                ),
                (
                    "API Reference",
                    "https://alibaba.github.io/yalantinglibs/doxygen_en/html/group__struct__pack.html",
                ),
            ]),
        )
        .with_topic(
            "coro_rpc",
            links(&[
                ("coro_rpc introduction", "/en/coro_rpc/coro_rpc_introduction"),
                ("coro_rpc client", "/en/coro_rpc/coro_rpc_client"),
                ("coro_rpc server", "/en/coro_rpc/coro_rpc_server"),
            ]),
        )
        .with_topic(
            "about",
            links(&[
                ("purecpp", "/en/about/community"),
                ("contribute", "/en/about/contribute"),
                ("community", "/en/about/teams"),
                ("team", "/en/about/yalantingUser"),
            ]),
        )
}

fn chinese() -> LocaleDataSet {
    LocaleDataSet::new("/zh/")
        .with_topic(
            "guide",
            links(&[
                ("雅兰亭库简介", "/zh/guide/what_is_yalantinglibs"),
                ("通过Git Submodule使用", "/zh/guide/how_to_use_as_git_submodule"),
                (
                    "通过CMake find_package使用",
                    "/zh/guide/how_to_use_by_cmake_find_package",
                ),
            ]),
        )
        .with_topic(
            "struct_pb",
            links(&[("struct_pb简介", "/zh/struct_pb/struct_pb_intro")]),
        )
        .with_topic(
            "struct_pack",
            links(&[
                ("struct_pack简介", "/zh/struct_pack/struct_pack_intro"),
                ("struct_pack提示", "/zh/struct_pack/struct_pack_tips"),
                ("struct_pack布局", "/zh/struct_pack/struct_pack_layout"),
                ("struct_pack类型系统", "/zh/struct_pack/struct_pack_type_system"),
                (
                    "API Reference",
                    "https://alibaba.github.io/yalantinglibs/doxygen_cn/html/group__struct__pack.html",
                ),
            ]),
        )
        .with_topic(
            "coro_rpc",
            links(&[
                ("coro_rpc简介", "/zh/coro_rpc/coro_rpc_introduction"),
                ("coro_rpc客户端介绍", "/zh/coro_rpc/coro_rpc_client"),
                ("coro_rpc服务端介绍", "/zh/coro_rpc/coro_rpc_server"),
            ]),
        )
        .with_topic(
            "easylog",
            links(&[("easylog简介", "/zh/easylog/easylog_introduction")]),
        )
        .with_topic(
            "coro_http",
            links(&[("coro_http 简介", "/zh/coro_http/coro_http_introduction")]),
        )
        .with_topic(
            "struct_xxx",
            links(&[(
                "struct_xml struct_json struct_yaml 简介",
                "/zh/struct_xxx/struct_xxx_introduction",
            )]),
        )
        .with_topic(
            "metric",
            links(&[("metric简介", "/zh/metric/metric_introduction")]),
        )
        .with_topic(
            "about",
            links(&[
                ("purecpp", "/zh/about/community"),
                ("contribute", "/zh/about/contribute"),
                ("community", "/zh/about/teams"),
                ("team", "/zh/about/yalantingUser"),
            ]),
        )
}
