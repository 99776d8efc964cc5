//! Shared helpers for integration tests: in-memory PDF generation.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document as LopdfDocument, Object, Stream};

/// A text line to place on a generated page.
pub struct TestLine {
    pub text: &'static str,
    pub size: i64,
    pub bold: bool,
}

/// Shorthand constructor.
pub fn line(text: &'static str, size: i64, bold: bool) -> TestLine {
    TestLine { text, size, bold }
}

/// Build a small in-memory PDF with one element of `pages` per page.
///
/// Lines are laid out top-down with generous spacing so each text-showing
/// operation lands on its own baseline.
pub fn build_pdf(pages: &[Vec<TestLine>]) -> Vec<u8> {
    let mut doc = LopdfDocument::with_version("1.4");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = vec![Operation::new("BT", vec![])];
        let mut y: i64 = 760;
        for l in lines {
            let font = if l.bold { "FB" } else { "FR" };
            operations.push(Operation::new(
                "Tf",
                vec![Object::Name(font.as_bytes().to_vec()), l.size.into()],
            ));
            operations.push(Operation::new(
                "Tm",
                vec![
                    1.into(),
                    0.into(),
                    0.into(),
                    1.into(),
                    72.into(),
                    y.into(),
                ],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(l.text)]));
            y -= 40;
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content stream"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! {
                    "FR" => regular_id,
                    "FB" => bold_id,
                },
            },
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("serialize test PDF");
    buf
}
