#![no_main]
use libfuzzer_sys::{fuzz_target, arbitrary::{Arbitrary, Unstructured}};
use progfs::{FileRegistry, FileSource, ProgfsError};

#[derive(Debug, Arbitrary)]
struct CopyOp {
    by_name: bool,
    id: u8,
    start: u16,
    chunk: u16,
    buf_len: u16,
}

// Registration plus arbitrary copies must never panic, and successful copies
// must match the backing bytes
fuzz_target!(|input: &[u8]| {
    let mut u = Unstructured::new(input);

    let capacity: u8 = match u.arbitrary() {
        Ok(c) => c,
        Err(_) => return,
    };
    let files: Vec<Vec<u8>> = match u.arbitrary() {
        Ok(f) => f,
        Err(_) => return,
    };
    let ops: Vec<CopyOp> = match u.arbitrary() {
        Ok(ops) => ops,
        Err(_) => return,
    };

    let names: Vec<String> = (0..files.len()).map(|i| format!("f{}", i % 7)).collect();
    let mut fs = FileRegistry::new(capacity);
    for (name, data) in names.iter().zip(&files) {
        if fs.register(name, data).is_err() {
            assert!(fs.is_full());
        }
    }

    for op in ops.iter().take(64) {
        let mut buf = vec![0u8; op.buf_len as usize];
        let name = format!("f{}", op.id % 7);
        let source = if op.by_name {
            FileSource::Name(&name)
        } else {
            FileSource::Id(op.id)
        };

        match fs.copy(source, &mut buf, op.start as usize, op.chunk as usize) {
            Ok(n) => {
                let record = fs.resolve(source).unwrap();
                let start = op.start as usize;
                assert_eq!(&buf[..n], &record.data()[start..start + n]);
            }
            Err(ProgfsError::NotFound(_))
            | Err(ProgfsError::OffsetOutOfRange { .. })
            | Err(ProgfsError::BufferTooSmall { .. }) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
});
