#![no_main]

use glam::Vec2;
use image::{Rgba, RgbaImage};
use libfuzzer_sys::fuzz_target;
use move_effect_editor::SelectionMachine;

// Jeweils 5 Bytes: Ereignistyp + x (i16) + y (i16), Festkomma 1/64 px
fuzz_target!(|data: &[u8]| {
    let mut machine = SelectionMachine::new();
    machine.set_source_image(RgbaImage::from_pixel(64, 48, Rgba([10, 20, 30, 255])));

    for chunk in data.chunks_exact(5) {
        let x = i16::from_le_bytes([chunk[1], chunk[2]]) as f32 / 64.0;
        let y = i16::from_le_bytes([chunk[3], chunk[4]]) as f32 / 64.0;
        let point = Vec2::new(x, y);
        match chunk[0] % 6 {
            0 => machine.pointer_down(point),
            1 | 2 => machine.pointer_move(point),
            3 => machine.pointer_up(point),
            4 => machine.set_repeat_count(chunk[1] as i32 - 64),
            _ => machine.set_overlay_alpha(chunk[2] as i32),
        }
    }

    let _ = machine.render_overlay();
    let _ = machine.composed_image();
});
