//! Scénarios bout-en-bout sur un arbre de fichiers temporaire, avec un
//! backend de rendu factice (aucune police requise).

use std::fs;
use std::path::Path;

use aa_app::convert::FileConverter;
use aa_app::walk;
use aa_core::{EntityTable, TextRenderer};
use image::RgbImage;
use tempfile::TempDir;

/// 8 px par caractère, aucun dessin : suffisant pour vérifier segmentation,
/// chemins de sortie et dimensions de canvas.
struct FixedWidth;

impl TextRenderer for FixedWidth {
    fn measure_width(&self, line: &str) -> f32 {
        line.chars().count() as f32 * 8.0
    }

    fn draw_line(&self, _canvas: &mut RgbImage, _text: &str, _x: f32, _baseline_y: f32) {}
}

fn setup() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("input");
    let output = tmp.path().join("output");
    fs::create_dir_all(&input).unwrap();
    (tmp, input, output)
}

fn convert(input: &Path, output: &Path, file: &Path) -> usize {
    let table = EntityTable::builtin().unwrap();
    let converter = FileConverter {
        table: &table,
        renderer: &FixedWidth,
        input_root: input,
        output_root: output,
    };
    converter.convert_file(file).unwrap()
}

fn png_dimensions(path: &Path) -> (u32, u32) {
    let img = image::load_from_memory(&fs::read(path).unwrap()).unwrap();
    (img.width(), img.height())
}

#[test]
fn two_blocks_two_images() {
    let (_tmp, input, output) = setup();
    let file = input.join("foo.mlt");
    fs::write(&file, "AAA\n[SPLIT]\nBBB\nCCC").unwrap();

    assert_eq!(convert(&input, &output, &file), 2);

    let block0 = output.join("foo/0.png");
    let block1 = output.join("foo/1.png");
    assert!(block0.exists());
    assert!(block1.exists());
    assert!(!output.join("foo/2.png").exists());

    // Bloc 0 = "AAA\n" : 2 lignes + marge haute, largeur 3×8 + marge gauche.
    assert_eq!(png_dimensions(&block0), (34, 54));
    // Bloc 1 = "BBB\nCCC\n" : 3 lignes + marge haute.
    assert_eq!(png_dimensions(&block1), (34, 72));
}

#[test]
fn leading_markers_collapse_to_single_block() {
    let (_tmp, input, output) = setup();
    let file = input.join("bar.mlt");
    fs::write(&file, "[SPLIT]\n[SPLIT]\nX").unwrap();

    assert_eq!(convert(&input, &output, &file), 1);
    assert!(output.join("bar/0.png").exists());
    assert!(!output.join("bar/1.png").exists());
}

#[test]
fn marker_only_file_writes_nothing() {
    let (_tmp, input, output) = setup();
    let file = input.join("empty.mlt");
    fs::write(&file, "[SPLIT]\n[SPLIT]").unwrap();

    assert_eq!(convert(&input, &output, &file), 0);
    assert!(!output.join("empty").exists());
}

#[test]
fn output_mirrors_nested_input_layout() {
    let (_tmp, input, output) = setup();
    let sub = input.join("series/arc1");
    fs::create_dir_all(&sub).unwrap();
    let file = sub.join("scene.mlt");
    fs::write(&file, "AA").unwrap();

    assert_eq!(convert(&input, &output, &file), 1);
    assert!(output.join("series/arc1/scene/0.png").exists());
}

#[test]
fn shift_jis_content_is_decoded_before_segmentation() {
    let (_tmp, input, output) = setup();
    let file = input.join("jp.mlt");
    // "あ" (0x82 0xA0), marqueur, "い" (0x82 0xA2) en Shift-JIS.
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&[0x82, 0xA0, b'\n']);
    bytes.extend_from_slice(b"[SPLIT]\n");
    bytes.extend_from_slice(&[0x82, 0xA2]);
    fs::write(&file, &bytes).unwrap();

    assert_eq!(convert(&input, &output, &file), 2);
    // Chaque bloc : une ligne d'un caractère → largeur 8 + 10.
    assert_eq!(png_dimensions(&output.join("jp/0.png")), (18, 54));
}

#[test]
fn malformed_shift_jis_falls_back_to_lossy_text() {
    let (_tmp, input, output) = setup();
    let file = input.join("broken.mlt");
    // Lead byte orphelin : la ligne est conservée en best-effort, jamais
    // perdue.
    fs::write(&file, [b'A', 0x82]).unwrap();

    assert_eq!(convert(&input, &output, &file), 1);
    assert!(output.join("broken/0.png").exists());
}

#[test]
fn entities_resolved_before_measuring() {
    let (_tmp, input, output) = setup();
    let file = input.join("ent.mlt");
    // "&hearts;" (8 caractères) devient "♥" (1 caractère) avant la mesure.
    fs::write(&file, "&hearts;").unwrap();

    assert_eq!(convert(&input, &output, &file), 1);
    assert_eq!(png_dimensions(&output.join("ent/0.png")), (18, 54));
}

#[test]
fn walker_filters_and_sorts() {
    let (_tmp, input, _output) = setup();
    fs::create_dir_all(input.join("sub")).unwrap();
    fs::write(input.join("b.mlt"), "x").unwrap();
    fs::write(input.join("sub/a.mlt"), "x").unwrap();
    fs::write(input.join("a.mlt.bak"), "x").unwrap(); // contient .mlt : retenu
    fs::write(input.join("notes.txt"), "x").unwrap();
    fs::write(input.join(".DS_Store"), "x").unwrap();

    let found = walk::discover(&input);
    let names: Vec<_> = found
        .iter()
        .map(|p| p.strip_prefix(&input).unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a.mlt.bak", "b.mlt", "sub/a.mlt"]);
}

#[test]
fn unreadable_file_is_a_read_error() {
    let (_tmp, input, output) = setup();
    let table = EntityTable::builtin().unwrap();
    let converter = FileConverter {
        table: &table,
        renderer: &FixedWidth,
        input_root: &input,
        output_root: &output,
    };
    let missing = input.join("missing.mlt");
    let err = converter.convert_file(&missing).unwrap_err();
    assert!(matches!(err, aa_core::ConvertError::Read { .. }));
}
