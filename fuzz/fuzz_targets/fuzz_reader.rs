#![no_main]

use libfuzzer_sys::fuzz_target;
use packet_reader::{InPacket, PacketReader};

fuzz_target!(|data: &[u8]| {
    // First half drives the operations, second half is the packet
    let (ops, payload) = data.split_at(data.len() / 2);
    let mut packet = PacketReader::new(payload);

    for pair in ops.chunks(2) {
        let arg = usize::from(pair.get(1).copied().unwrap_or(0));
        let before = packet.position();
        let ok = match pair[0] % 9 {
            0 => packet.read_byte().is_ok(),
            1 => packet.read_short().is_ok(),
            2 => packet.read_int().is_ok(),
            3 => packet.read_long().is_ok(),
            4 => packet.read_point().is_ok(),
            5 => packet.read_string().is_ok(),
            6 => packet.read_bytes(arg).is_ok(),
            7 => packet.skip(arg).is_ok(),
            _ => packet.seek(arg).is_ok(),
        };

        if !ok {
            assert_eq!(packet.position(), before);
        }
        assert!(packet.position() <= payload.len());
        assert_eq!(packet.available(), payload.len() - packet.position());
    }
});
