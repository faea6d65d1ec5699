use flate2::Compression;
use flate2::write::ZlibEncoder;
use sha1::{Digest, Sha1};
use std::io::Write;
use std::path::Path;

/// Encode `<type> <size>\0<body>`
pub fn object_record(object_type: &str, body: &[u8]) -> Vec<u8> {
    let mut record = format!("{object_type} {}\0", body.len()).into_bytes();
    record.extend_from_slice(body);
    record
}

pub fn hash_record(record: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(record);
    format!("{:x}", hasher.finalize())
}

pub fn compress(record: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(record)
        .expect("Failed to compress object");
    encoder.finish().expect("Failed to finish compression")
}

/// Store a raw record as a loose object and return its id
pub fn write_record(objects_dir: &Path, record: &[u8]) -> String {
    let oid = hash_record(record);
    let (dir, file) = oid.split_at(2);
    let object_dir = objects_dir.join(dir);

    std::fs::create_dir_all(&object_dir)
        .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", object_dir, e));
    std::fs::write(object_dir.join(file), compress(record))
        .unwrap_or_else(|e| panic!("Failed to write object {}: {}", oid, e));

    oid
}

pub fn write_object(objects_dir: &Path, object_type: &str, body: &[u8]) -> String {
    write_record(objects_dir, &object_record(object_type, body))
}

/// Encode tree entries as `<mode> <name>\0<20 raw bytes>`
pub fn tree_body(entries: &[(&str, &str, &str)]) -> Vec<u8> {
    let mut body = Vec::new();
    for (mode, name, oid) in entries {
        body.extend_from_slice(format!("{mode} {name}\0").as_bytes());
        for i in (0..oid.len()).step_by(2) {
            let byte = u8::from_str_radix(&oid[i..i + 2], 16).expect("Invalid hex digit");
            body.push(byte);
        }
    }
    body
}
