use super::{part_path, split_file};
use std::path::PathBuf;
use std::{env, fs};

fn temp_input(name: &str, bytes: &[u8]) -> PathBuf {
    let mut path = PathBuf::from(env::temp_dir());
    path.push(name);
    fs::write(&path, bytes).expect("failed to write temp input");
    path
}

fn temp_chunk_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env::temp_dir());
    path.push(name);
    path
}

#[test]
fn test_part_path_numbering() {
    assert_eq!(
        part_path("static/model/gpt2.onnx", 0),
        PathBuf::from("static/model/gpt2.onnx.part0")
    );
    assert_eq!(
        part_path("static/model/gpt2.onnx", 12),
        PathBuf::from("static/model/gpt2.onnx.part12")
    );
}

#[test]
fn test_split_with_remainder() {
    let input = temp_input("vizgen_chunk_rem.bin", &[7u8; 10]);
    let chunk = temp_chunk_path("vizgen_chunk_rem_out.bin");

    let report = split_file(input.to_str().unwrap(), chunk.to_str().unwrap(), 4)
        .expect("split_file failed");

    assert_eq!(report.parts.len(), 3, "10 bytes at size 4 -> 4+4+2");
    assert_eq!(report.total_bytes, 10);
    assert_eq!(fs::read(&report.parts[0]).unwrap().len(), 4);
    assert_eq!(fs::read(&report.parts[1]).unwrap().len(), 4);
    assert_eq!(fs::read(&report.parts[2]).unwrap().len(), 2);

    for part in &report.parts {
        let _ = fs::remove_file(part);
    }
    let _ = fs::remove_file(input);
}

#[test]
fn test_split_exact_multiple_has_no_empty_part() {
    let input = temp_input("vizgen_chunk_exact.bin", &[1u8; 8]);
    let chunk = temp_chunk_path("vizgen_chunk_exact_out.bin");

    let report = split_file(input.to_str().unwrap(), chunk.to_str().unwrap(), 4)
        .expect("split_file failed");

    assert_eq!(report.parts.len(), 2, "exact multiple must not add an empty part");
    assert_eq!(report.total_bytes, 8);

    for part in &report.parts {
        let _ = fs::remove_file(part);
    }
    let _ = fs::remove_file(input);
}

#[test]
fn test_split_concat_reproduces_input() {
    let payload: Vec<u8> = (0u8..=255).cycle().take(1000).collect();
    let input = temp_input("vizgen_chunk_concat.bin", &payload);
    let chunk = temp_chunk_path("vizgen_chunk_concat_out.bin");

    let report = split_file(input.to_str().unwrap(), chunk.to_str().unwrap(), 300)
        .expect("split_file failed");

    let mut rebuilt = Vec::new();
    for part in &report.parts {
        rebuilt.extend(fs::read(part).expect("part should be readable"));
    }
    assert_eq!(rebuilt, payload, "parts must concatenate back to the input");

    for part in &report.parts {
        let _ = fs::remove_file(part);
    }
    let _ = fs::remove_file(input);
}

#[test]
fn test_resplit_removes_stale_parts() {
    let input = temp_input("vizgen_chunk_resplit.bin", &[5u8; 10]);
    let chunk = temp_chunk_path("vizgen_chunk_resplit_out.bin");

    // first run at size 4 leaves parts 0..=2
    let first = split_file(input.to_str().unwrap(), chunk.to_str().unwrap(), 4)
        .expect("split_file failed");
    assert_eq!(first.parts.len(), 3);

    // second run at size 8 needs only parts 0..=1; part2 must not survive
    let second = split_file(input.to_str().unwrap(), chunk.to_str().unwrap(), 8)
        .expect("split_file failed");
    assert_eq!(second.parts.len(), 2);
    assert!(
        !part_path(chunk.to_str().unwrap(), 2).exists(),
        "stale part from the earlier run must be removed"
    );

    let mut rebuilt = Vec::new();
    for part in &second.parts {
        rebuilt.extend(fs::read(part).expect("part should be readable"));
    }
    assert_eq!(rebuilt, vec![5u8; 10], "all remaining parts rebuild the input");

    for part in &second.parts {
        let _ = fs::remove_file(part);
    }
    let _ = fs::remove_file(input);
}

#[test]
fn test_split_empty_input_writes_no_parts() {
    let input = temp_input("vizgen_chunk_empty.bin", &[]);
    let chunk = temp_chunk_path("vizgen_chunk_empty_out.bin");

    let report = split_file(input.to_str().unwrap(), chunk.to_str().unwrap(), 4)
        .expect("split_file failed");

    assert!(report.parts.is_empty(), "empty input must produce no parts");
    assert_eq!(report.total_bytes, 0);
    assert!(!part_path(chunk.to_str().unwrap(), 0).exists());
    let _ = fs::remove_file(input);
}

#[test]
fn test_split_zero_chunk_size_is_rejected() {
    use std::io::ErrorKind;
    let input = temp_input("vizgen_chunk_zero.bin", &[1, 2, 3]);
    let chunk = temp_chunk_path("vizgen_chunk_zero_out.bin");

    let result = split_file(input.to_str().unwrap(), chunk.to_str().unwrap(), 0);
    assert!(result.is_err());
    assert_eq!(result.err().unwrap().kind(), ErrorKind::InvalidInput);
    let _ = fs::remove_file(input);
}

#[test]
fn test_split_missing_input() {
    use std::io::ErrorKind;
    let chunk = temp_chunk_path("vizgen_chunk_missing_out.bin");
    let result = split_file("nonexistent_model.onnx", chunk.to_str().unwrap(), 4);
    assert!(result.is_err());
    assert_eq!(result.err().unwrap().kind(), ErrorKind::NotFound);
}

#[test]
fn test_split_creates_parent_dir() {
    let input = temp_input("vizgen_chunk_mkdir.bin", &[9u8; 6]);
    let mut dir = PathBuf::from(env::temp_dir());
    dir.push("vizgen_chunk_mkdir_out");
    let _ = fs::remove_dir_all(&dir);
    let chunk = dir.join("model.onnx");

    let report = split_file(input.to_str().unwrap(), chunk.to_str().unwrap(), 4)
        .expect("split_file failed");
    assert_eq!(report.parts.len(), 2);
    assert!(report.parts[0].exists());

    let _ = fs::remove_dir_all(&dir);
    let _ = fs::remove_file(input);
}
