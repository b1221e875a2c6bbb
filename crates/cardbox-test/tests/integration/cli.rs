//! Tests for the command line over real files.

use pretty_assertions::assert_eq;

use cardbox_test::app::cli::{Cli, run};
use cardbox_test::component::config::Settings;

use clap::Parser as _;

use super::helpers::*;

fn exec(args: &[&str]) -> (String, String) {
    let cli = Cli::try_parse_from(std::iter::once("cardbox").chain(args.iter().copied()))
        .expect("valid arguments");
    let mut out = Vec::new();
    let mut err = Vec::new();
    run(&cli, &Settings::default(), &mut out, &mut err).expect("command succeeds");
    (
        String::from_utf8(out).expect("utf-8 output"),
        String::from_utf8(err).expect("utf-8 output"),
    )
}

#[test_log::test]
fn list_then_export_one_file() {
    let tree = ContactTree::new();
    let source = tree.write("phone.vcf", PHONE_EXPORT);
    let source = source.to_string_lossy().into_owned();

    let (out, err) = exec(&["--file", "--source", source.as_str(), "list"]);
    assert_eq!(out, "1\tИван Петров\t+7 900 123-45-67\n2\tJane Doe\t+1 555 0100\n");
    assert_eq!(err, "");

    let target = ContactTree::new();
    let dest = target.path().to_string_lossy().into_owned();
    let (out, _) = exec(&["--source", source.as_str(), "export", dest.as_str()]);

    assert_eq!(out, format!("Wrote 2 files to {dest}\n"));
    assert!(target.exists("Jane Doe.vcf"));
}
