//! End-to-end tests for the sprite pipeline.
//!
//! Runs discovery, merging and declaration output against the icons in
//! `tests/fixtures/sprites` and against small generated directories.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use svgsprite::markup::{Document, NodeId};
use svgsprite::{generate, Config, SpriteError};
use tempfile::tempdir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sprites")
}

fn config(sprites: &Path, out: &Path) -> Config {
    Config {
        sprites_path: sprites.to_path_buf(),
        sprite_types_output_path: out.join("SpriteProps.ts"),
        sprite_output_path: out.join("sprites.svg"),
    }
}

/// Parse sprite output and return the document with its symbol nodes.
fn symbols(sprite: &str) -> (Document, Vec<NodeId>) {
    let mut doc = Document::new();
    let fragment = doc.parse_fragment(sprite).unwrap();
    let holder = doc.find_element(fragment, "svg").unwrap();
    let symbols = doc
        .children(holder)
        .iter()
        .copied()
        .filter(|&c| doc.element(c).is_some_and(|e| e.name == "symbol"))
        .collect();
    (doc, symbols)
}

#[test]
fn fixture_declarations() {
    let out = tempdir().unwrap();
    let generated = generate(&config(&fixtures_dir(), out.path())).unwrap();

    insta::assert_snapshot!(generated.declarations, @r#"
    export const spriteNames = [
      "outline:academic-cap",
      "outline:archive",
      "solid:academic-cap",
      "solid:archive",
    ] as const;
    type SpriteName = typeof spriteNames[number];
    export type SpriteProps = {
      name: SpriteName;
    } & JSX.IntrinsicElements["svg"];
    "#);
}

#[test]
fn fixture_symbols_match_ids_in_order() {
    let out = tempdir().unwrap();
    let generated = generate(&config(&fixtures_dir(), out.path())).unwrap();

    let (doc, symbols) = symbols(&generated.sprite);
    let ids: Vec<&str> = symbols
        .iter()
        .map(|&s| doc.element(s).unwrap().attribute("id").unwrap())
        .collect();

    assert_eq!(symbols.len(), 4);
    assert_eq!(ids, generated.ids);
}

#[test]
fn fixture_root_attributes_survive() {
    let out = tempdir().unwrap();
    let generated = generate(&config(&fixtures_dir(), out.path())).unwrap();
    let (doc, symbols) = symbols(&generated.sprite);

    for (symbol, id) in symbols.iter().zip(&generated.ids) {
        let relative = id.replacen(':', "/", 1) + ".svg";
        let source = fs::read_to_string(fixtures_dir().join(&relative)).unwrap();

        let mut original = Document::new();
        let fragment = original.parse_fragment(&source).unwrap();
        let root = original.find_element(fragment, "svg").unwrap();

        let symbol = doc.element(*symbol).unwrap();
        for attr in &original.element(root).unwrap().attributes {
            assert_eq!(
                symbol.attribute(&attr.name),
                Some(attr.value.as_str()),
                "{} lost {}",
                relative,
                attr.name
            );
        }
    }
}

#[test]
fn archive_scenario() {
    let dir = tempdir().unwrap();
    let sprites = dir.path().join("sprites");
    fs::create_dir_all(sprites.join("outline")).unwrap();
    fs::create_dir_all(sprites.join("solid")).unwrap();
    fs::write(
        sprites.join("outline/archive.svg"),
        r#"<svg viewBox="0 0 20 20"><path d="M1"/></svg>"#,
    )
    .unwrap();
    fs::write(
        sprites.join("solid/archive.svg"),
        r#"<svg viewBox="0 0 20 20"><path d="M2"/></svg>"#,
    )
    .unwrap();

    let config = config(&sprites, &dir.path().join("out"));
    let generated = generate(&config).unwrap();
    generated.write(&config).unwrap();

    let sprite = fs::read_to_string(&config.sprite_output_path).unwrap();
    insta::assert_snapshot!(sprite, @r#"<svg xmlns="http://www.w3.org/2000/svg"><symbol viewBox="0 0 20 20" id="outline:archive"><path d="M1"/></symbol><symbol viewBox="0 0 20 20" id="solid:archive"><path d="M2"/></symbol></svg>"#);

    let types = fs::read_to_string(&config.sprite_types_output_path).unwrap();
    assert!(types.starts_with(
        "export const spriteNames = [\n  \"outline:archive\",\n  \"solid:archive\",\n] as const;\n"
    ));
}

#[test]
fn empty_directory_generates_empty_outputs() {
    let dir = tempdir().unwrap();
    let sprites = dir.path().join("sprites");
    fs::create_dir_all(&sprites).unwrap();

    let config = config(&sprites, dir.path());
    let generated = generate(&config).unwrap();
    generated.write(&config).unwrap();

    let (_, symbols) = symbols(&fs::read_to_string(&config.sprite_output_path).unwrap());
    assert!(symbols.is_empty());

    let types = fs::read_to_string(&config.sprite_types_output_path).unwrap();
    assert!(types.starts_with("export const spriteNames = [] as const;\n"));
}

#[test]
fn duplicate_ids_fail_without_output() {
    let dir = tempdir().unwrap();
    let sprites = dir.path().join("sprites");
    fs::create_dir_all(sprites.join("solid")).unwrap();
    fs::write(sprites.join("solid/archive.svg"), "<svg/>").unwrap();
    fs::write(sprites.join("solid/archive .svg"), "<svg/>").unwrap();

    let config = config(&sprites, &dir.path().join("out"));
    let result = generate(&config).and_then(|g| g.write(&config));

    match result {
        Err(SpriteError::DuplicateId { id, .. }) => assert_eq!(id, "solid:archive"),
        other => panic!("expected DuplicateId, got {:?}", other),
    }
    assert!(!dir.path().join("out").exists());
}

#[test]
fn second_run_is_byte_identical() {
    let dir = tempdir().unwrap();
    let config = config(&fixtures_dir(), dir.path());

    generate(&config).unwrap().write(&config).unwrap();
    let sprite = fs::read(&config.sprite_output_path).unwrap();
    let types = fs::read(&config.sprite_types_output_path).unwrap();

    let again = generate(&config).unwrap();
    assert!(again.is_up_to_date(&config));
    again.write(&config).unwrap();

    assert_eq!(fs::read(&config.sprite_output_path).unwrap(), sprite);
    assert_eq!(fs::read(&config.sprite_types_output_path).unwrap(), types);
}

#[test]
fn nested_directories_keep_inner_separators() {
    let dir = tempdir().unwrap();
    let sprites = dir.path().join("sprites");
    fs::create_dir_all(sprites.join("a/b")).unwrap();
    fs::write(sprites.join("a/b/c.svg"), "<svg/>").unwrap();

    let generated = generate(&config(&sprites, dir.path())).unwrap();

    assert_eq!(generated.ids, vec!["a:b/c".to_string()]);
    assert!(generated.sprite.contains(r#"<symbol id="a:b/c"/>"#));
}

#[test]
fn hidden_files_are_ignored() {
    let dir = tempdir().unwrap();
    let sprites = dir.path().join("sprites");
    fs::create_dir_all(sprites.join("outline")).unwrap();
    fs::create_dir_all(sprites.join(".cache")).unwrap();
    fs::write(sprites.join("outline/archive.svg"), "<svg/>").unwrap();
    let apple_double = [0x00u8, 0x05, 0x16, 0x07, 0xff];
    fs::write(sprites.join("outline/._archive.svg"), apple_double).unwrap();
    fs::write(sprites.join(".cache/old.svg"), "<svg/>").unwrap();

    let generated = generate(&config(&sprites, dir.path())).unwrap();

    assert_eq!(generated.ids, vec!["outline:archive".to_string()]);
}
