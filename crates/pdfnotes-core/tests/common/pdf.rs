//! lopdf PDF builder shared by the core and CLI test suites.

use lopdf::{dictionary, Object, Stream};

/// Build a PDF where each page shows the given lines, one text object per
/// line. A page with no lines only paints a rectangle, like a scanned page
/// without a text layer.
pub fn pdf_bytes<P, L>(pages: &[P]) -> Vec<u8>
where
    P: AsRef<[L]>,
    L: AsRef<str>,
{
    let mut doc = lopdf::Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for lines in pages {
        let lines = lines.as_ref();
        let content = if lines.is_empty() {
            "q 0.5 g 72 72 468 648 re f Q".to_string()
        } else {
            lines
                .iter()
                .enumerate()
                .map(|(i, line)| {
                    let y = 720 - 16 * i as i64;
                    format!("BT /F1 12 Tf 72 {y} Td ({}) Tj ET", line.as_ref())
                })
                .collect::<Vec<_>>()
                .join("\n")
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

        let page_dict = dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => Object::Reference(font_id) },
            },
        };
        page_ids.push(doc.add_object(page_dict));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(pages.len() as i64),
    });

    for &pid in &page_ids {
        if let Ok(page_obj) = doc.get_object_mut(pid) {
            if let Ok(dict) = page_obj.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}
