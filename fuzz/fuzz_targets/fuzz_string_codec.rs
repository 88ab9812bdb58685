#![no_main]

use bytes::BytesMut;
use libfuzzer_sys::fuzz_target;
use tobcomm::core::codec::StringCodec;
use tokio_util::codec::Decoder;

fuzz_target!(|data: &[u8]| {
    let mut codec = StringCodec::new();
    let mut buf = BytesMut::from(data);
    while let Ok(Some(_)) = codec.decode(&mut buf) {}
});
