//! Property tests holding the safe and fast backends to identical
//! observable behavior: byte-identical buffer contents, bit-identical
//! recovered values, identical errors, and untouched cursors.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use strake_buf::{ByteBuf, DoubleBuf, FloatBuf};
use strake_core::{Mat2, Mat3, Mat3x2, Mat4, Mat4x3, Quat, Vec2, Vec3, Vec4};
use strake_marshal::{Codec, Strategy};
use strake_test_utils::{arb_f32_array, arb_f64_array, bits_of};

fn safe() -> Codec {
    Codec::with_strategy(Strategy::SafeOnly).unwrap()
}

fn fast() -> Codec {
    Codec::with_strategy(Strategy::Auto).unwrap()
}

/// Run `op` under both backends into fresh direct byte buffers and
/// require byte-identical contents.
fn same_bytes(
    capacity: usize,
    op: impl Fn(&Codec, &mut ByteBuf),
) -> Result<(), TestCaseError> {
    let mut with_safe = ByteBuf::allocate_direct(capacity);
    let mut with_fast = ByteBuf::allocate_direct(capacity);
    op(&safe(), &mut with_safe);
    op(&fast(), &mut with_fast);
    prop_assert_eq!(with_safe.as_slice(), with_fast.as_slice());
    Ok(())
}

proptest! {
    #[test]
    fn every_f32_put_is_byte_identical(a in arb_f32_array::<16>(), off in 0usize..8) {
        let m2 = Mat2::from_array([a[0], a[1], a[2], a[3]]);
        let m3 = Mat3::from_array([a[0], a[1], a[2], a[3], a[4], a[5], a[6], a[7], a[8]]);
        let m4 = Mat4::from_array(a);
        let m32 = Mat3x2::from_array([a[0], a[1], a[2], a[3], a[4], a[5]]);
        let m43 = Mat4x3::from_array([
            a[0], a[1], a[2], a[3], a[4], a[5], a[6], a[7], a[8], a[9], a[10], a[11],
        ]);
        let cap = off + 64;

        same_bytes(cap, |c, b| c.put_vec2(&Vec2::new(a[0], a[1]), off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_vec3(&Vec3::new(a[0], a[1], a[2]), off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_vec4(&Vec4::from_array([a[0], a[1], a[2], a[3]]), off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_quat(&Quat::from_array([a[0], a[1], a[2], a[3]]), off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat2(&m2, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat3(&m3, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat4(&m4, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat3x2(&m32, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat4x3(&m43, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat2_transposed(&m2, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat3_transposed(&m3, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat4_transposed(&m4, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat4x3_transposed(&m43, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat4_4x3_transposed(&m4, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat3f_4x4(&m3, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat4x3f_4x4(&m43, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat3x2f_3x3(&m32, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat3x2f_4x4(&m32, off, b).unwrap())?;
    }

    #[test]
    fn every_f64_put_is_byte_identical(a in arb_f64_array::<16>(), off in 0usize..8) {
        let m3 = Mat3::from_array([a[0], a[1], a[2], a[3], a[4], a[5], a[6], a[7], a[8]]);
        let m4 = Mat4::from_array(a);
        let m32 = Mat3x2::from_array([a[0], a[1], a[2], a[3], a[4], a[5]]);
        let m43 = Mat4x3::from_array([
            a[0], a[1], a[2], a[3], a[4], a[5], a[6], a[7], a[8], a[9], a[10], a[11],
        ]);
        let cap = off + 128;

        same_bytes(cap, |c, b| c.put_mat4(&m4, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat4_transposed(&m4, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat3d_4x4(&m3, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat4x3d_4x4(&m43, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat3x2d_3x3(&m32, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.put_mat3x2d_4x4(&m32, off, b).unwrap())?;
        // Narrowing writes f32 scalars, still into the same byte buffer.
        same_bytes(cap, |c, b| c.putf_mat4(&m4, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.putf_mat4x3(&m43, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.putf_mat4_transposed(&m4, off, b).unwrap())?;
        same_bytes(cap, |c, b| c.putf_mat4x3_transposed(&m43, off, b).unwrap())?;
    }

    #[test]
    fn round_trip_is_bit_exact_under_both_backends(a in arb_f64_array::<16>(), off in 0usize..4) {
        for codec in [safe(), fast()] {
            let m = Mat4::from_array(a);
            let mut buf = DoubleBuf::allocate_direct(off + 16);
            codec.put_mat4(&m, off, &mut buf).unwrap();
            let mut out = Mat4::<f64>::identity();
            codec.get_mat4(&mut out, off, &buf).unwrap();
            prop_assert_eq!(bits_of(out.to_array()), bits_of(a));
        }
    }

    #[test]
    fn round_trip_vec_and_quat(a in arb_f32_array::<4>(), off in 0usize..4) {
        for codec in [safe(), fast()] {
            let mut buf = FloatBuf::allocate_direct(off + 4);
            let q = Quat::from_array(a);
            codec.put_quat(&q, off, &mut buf).unwrap();
            let mut out = Quat::<f32>::identity();
            codec.get_quat(&mut out, off, &buf).unwrap();
            prop_assert_eq!(bits_of(out.to_array()), bits_of(a));

            let v = Vec3::new(a[0], a[1], a[2]);
            codec.put_vec3(&v, off, &mut buf).unwrap();
            let mut vout = Vec3::<f32>::default();
            codec.get_vec3(&mut vout, off, &buf).unwrap();
            prop_assert_eq!(bits_of(vout.to_array()), bits_of(v.to_array()));
        }
    }

    #[test]
    fn cursor_is_never_advanced(a in arb_f32_array::<16>(), pos in 0usize..16) {
        for codec in [safe(), fast()] {
            let m = Mat4::from_array(a);
            let mut buf = FloatBuf::allocate_direct(16);
            buf.set_position(pos).unwrap();
            codec.put_mat4(&m, 0, &mut buf).unwrap();
            let mut out = Mat4::<f32>::identity();
            codec.get_mat4(&mut out, 0, &buf).unwrap();
            prop_assert_eq!(buf.position(), pos);
        }
    }

    #[test]
    fn transposed_put_recovers_the_transpose(a in arb_f32_array::<16>()) {
        for codec in [safe(), fast()] {
            let m = Mat4::from_array(a);
            let mut buf = FloatBuf::allocate_direct(16);
            codec.put_mat4_transposed(&m, 0, &mut buf).unwrap();
            let mut out = Mat4::<f32>::identity();
            codec.get_mat4(&mut out, 0, &buf).unwrap();
            // Element (column c, row r) of the recovered matrix must be
            // element (column r, row c) of the original.
            let expected: [f32; 16] = std::array::from_fn(|i| a[(i % 4) * 4 + i / 4]);
            prop_assert_eq!(bits_of(out.to_array()), bits_of(expected));
        }
    }

    #[test]
    fn padding_is_deterministic(a in arb_f32_array::<12>()) {
        for codec in [safe(), fast()] {
            let m = Mat4x3::from_array(a);
            let mut buf = FloatBuf::allocate_direct(16);
            codec.put_mat4x3f_4x4(&m, 0, &mut buf).unwrap();
            let out = buf.as_slice();
            for c in 0..4 {
                for r in 0..3 {
                    prop_assert_eq!(out[c * 4 + r].to_bits(), a[c * 3 + r].to_bits());
                }
            }
            // Fourth row is the homogeneous (0, 0, 0, 1) regardless of input.
            prop_assert_eq!(out[3].to_bits(), 0.0f32.to_bits());
            prop_assert_eq!(out[7].to_bits(), 0.0f32.to_bits());
            prop_assert_eq!(out[11].to_bits(), 0.0f32.to_bits());
            prop_assert_eq!(out[15].to_bits(), 1.0f32.to_bits());
        }
    }

    #[test]
    fn mat3x2_expansions_pad_deterministically(a in arb_f32_array::<6>()) {
        for codec in [safe(), fast()] {
            let m = Mat3x2::from_array(a);

            let mut to3x3 = FloatBuf::allocate_direct(9);
            codec.put_mat3x2f_3x3(&m, 0, &mut to3x3).unwrap();
            let out = to3x3.as_slice();
            prop_assert_eq!(out[2].to_bits(), 0);
            prop_assert_eq!(out[5].to_bits(), 0);
            prop_assert_eq!(out[8].to_bits(), 1.0f32.to_bits());

            let mut to4x4 = FloatBuf::allocate_direct(16);
            codec.put_mat3x2f_4x4(&m, 0, &mut to4x4).unwrap();
            let out = to4x4.as_slice();
            prop_assert_eq!(out[0].to_bits(), a[0].to_bits());
            prop_assert_eq!(out[13].to_bits(), a[5].to_bits());
            for pad in [2, 3, 6, 7, 8, 9, 11, 14] {
                prop_assert_eq!(out[pad].to_bits(), 0);
            }
            prop_assert_eq!(out[10].to_bits(), 1.0f32.to_bits());
            prop_assert_eq!(out[15].to_bits(), 1.0f32.to_bits());
        }
    }

    #[test]
    fn narrowing_matches_explicit_casts(a in arb_f64_array::<16>(), off in 0usize..4) {
        for codec in [safe(), fast()] {
            let m = Mat4::from_array(a);
            let mut buf = FloatBuf::allocate_direct(off + 16);
            codec.putf_mat4(&m, off, &mut buf).unwrap();
            for (i, v) in a.iter().enumerate() {
                prop_assert_eq!(buf.as_slice()[off + i].to_bits(), (*v as f32).to_bits());
            }
            // Widening read back is exact for every value a cast produced.
            let mut wide = Mat4::<f64>::identity();
            codec.getf_mat4(&mut wide, off, &buf).unwrap();
            for (i, v) in wide.to_array().iter().enumerate() {
                prop_assert_eq!(v.to_bits(), f64::from(a[i] as f32).to_bits());
            }
        }
    }

    #[test]
    fn narrowed_vectors_round_trip(a in arb_f64_array::<4>()) {
        for codec in [safe(), fast()] {
            let mut buf = FloatBuf::allocate_direct(4);

            let v = Vec4::from_array(a);
            codec.putf_vec4(&v, 0, &mut buf).unwrap();
            let mut out = Vec4::<f64>::default();
            codec.getf_vec4(&mut out, 0, &buf).unwrap();
            let expected: [f64; 4] = std::array::from_fn(|i| f64::from(a[i] as f32));
            prop_assert_eq!(bits_of(out.to_array()), bits_of(expected));

            let q = Quat::from_array(a);
            codec.putf_quat(&q, 0, &mut buf).unwrap();
            let mut qout = Quat::<f64>::identity();
            codec.getf_quat(&mut qout, 0, &buf).unwrap();
            prop_assert_eq!(bits_of(qout.to_array()), bits_of(expected));
        }
    }

    #[test]
    fn out_of_range_errors_are_identical(a in arb_f32_array::<16>(), off in 1usize..32) {
        let m = Mat4::from_array(a);
        // Capacity deliberately one scalar short of the footprint.
        let mut heap = FloatBuf::allocate(off + 15);
        let mut direct = FloatBuf::allocate_direct(off + 15);
        let safe_err = safe().put_mat4(&m, off, &mut heap).unwrap_err();
        let fast_err = fast().put_mat4(&m, off, &mut direct).unwrap_err();
        prop_assert_eq!(safe_err, fast_err);
    }
}
