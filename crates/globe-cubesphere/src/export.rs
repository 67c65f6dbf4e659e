//! Wavefront OBJ export.
//!
//! Writes positions (`v`), texture coordinates (`vt`) when the layout has
//! them, one group (`g`) per face, and 1-based triangle faces (`f`).

use std::io::{self, Write};

use crate::CubesphereMesh;

/// Write `mesh` as OBJ text to `writer`.
pub fn write_obj<W: Write>(mesh: &CubesphereMesh, mut writer: W) -> io::Result<()> {
    writeln!(writer, "# cubesphere {}", mesh.level())?;
    writeln!(writer, "o cubesphere")?;

    for p in mesh.positions() {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }

    let has_uvs = mesh.layout().has_uv();
    if has_uvs {
        for uv in (0..mesh.vertex_count()).filter_map(|i| mesh.uv(i)) {
            writeln!(writer, "vt {} {}", uv.x, uv.y)?;
        }
    }

    for (slot, face) in mesh.faces().iter().enumerate() {
        writeln!(writer, "g face{}", face.label())?;
        for tri in mesh.indices()[mesh.face_index_range(slot)].chunks_exact(3) {
            let [a, b, c] = [tri[0] + 1, tri[1] + 1, tri[2] + 1];
            if has_uvs {
                writeln!(writer, "f {a}/{a} {b}/{b} {c}/{c}")?;
            } else {
                writeln!(writer, "f {a} {b} {c}")?;
            }
        }
    }

    writer.flush()
}

/// Render `mesh` as an OBJ string.
pub fn export_obj(mesh: &CubesphereMesh) -> String {
    let mut out = Vec::new();
    write_obj(mesh, &mut out).expect("writing to Vec<u8> cannot fail");
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MeshOptions, VertexLayout, generate, generate_cubesphere};

    fn count(text: &str, prefix: &str) -> usize {
        text.lines().filter(|l| l.starts_with(prefix)).count()
    }

    #[test]
    fn test_obj_line_counts() {
        let mesh = generate_cubesphere(1).unwrap();
        let obj = export_obj(&mesh);
        assert_eq!(count(&obj, "v "), 54);
        assert_eq!(count(&obj, "vt "), 54);
        assert_eq!(count(&obj, "g "), 6);
        assert_eq!(count(&obj, "f "), 48);
        assert!(obj.contains("g face+X"));
        assert!(obj.contains("g face-Z"));
    }

    #[test]
    fn test_obj_indices_are_one_based() {
        let mesh = generate(&MeshOptions {
            subdivision: 0,
            layout: VertexLayout::Position,
            ..MeshOptions::default()
        })
        .unwrap();
        let obj = export_obj(&mesh);
        assert_eq!(count(&obj, "vt "), 0);
        let first_face = obj.lines().find(|l| l.starts_with("f ")).unwrap();
        assert_eq!(first_face, "f 1 3 2");
    }

    #[test]
    fn test_write_obj_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sphere.obj");
        let mesh = generate_cubesphere(2).unwrap();
        write_obj(&mesh, io::BufWriter::new(std::fs::File::create(&path).unwrap())).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(count(&text, "f "), mesh.triangle_count());
    }
}
