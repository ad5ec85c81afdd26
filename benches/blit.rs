use archmage::SimdToken;
use criterion::{BenchmarkGroup, Criterion, Throughput, measurement::WallTime};
use pixblit::{Argb8888, Pixel, Pos, surface};

// === SIMD tier detection ===

fn probe<T: SimdToken>() -> &'static str {
    if T::summon().is_some() {
        "available"
    } else {
        "not available"
    }
}

fn print_simd_info() {
    eprintln!("=== SIMD Tier Detection ===");
    #[cfg(target_arch = "x86_64")]
    {
        eprintln!(
            "  AVX2+FMA (x86-64-v3):    {}",
            probe::<archmage::X64V3Token>()
        );
    }
    #[cfg(target_arch = "aarch64")]
    {
        eprintln!(
            "  Arm64-v2:                {}",
            probe::<archmage::Arm64V2Token>()
        );
    }
    #[cfg(target_arch = "wasm32")]
    {
        eprintln!(
            "  WASM SIMD128:            {}",
            probe::<archmage::Wasm128Token>()
        );
    }
    eprintln!("  Scalar:                  always available");
    eprintln!("===========================");
}

// === Scalar disable/enable via archmage ===

fn disable_all_simd() {
    let _ = archmage::dangerously_disable_tokens_except_wasm(true);
}

fn enable_all_simd() {
    let _ = archmage::dangerously_disable_tokens_except_wasm(false);
}

// === Naive baselines ===

fn naive_set_line_1555(dst: &mut [Pixel], src: &[Pixel]) {
    for (d, s) in dst.iter_mut().zip(src) {
        if s.word() & 0x8000 != 0 {
            *d = *s;
        }
    }
}

fn naive_set_line_8888(dst: &mut [Argb8888], src: &[Argb8888]) {
    for (d, s) in dst.iter_mut().zip(src) {
        if s.word() & 0xFF00_0000 != 0 {
            *d = *s;
        }
    }
}

fn naive_mask_rgb_1555(buf: &mut [Pixel]) {
    for p in buf {
        *p = Pixel::new(p.word() & 0x7FFF);
    }
}

// === Benchmark helpers ===

const W: usize = 1920;
const H: usize = 1080;

fn sprite_1555(n: usize) -> Vec<Pixel> {
    // Roughly half the pixels keyed out.
    (0..n)
        .map(|i| Pixel::new(((i as u32).wrapping_mul(0x9E37_79B9) >> 16) as u16))
        .collect()
}

fn sprite_8888(n: usize) -> Vec<Argb8888> {
    (0..n)
        .map(|i| {
            let w = (i as u32).wrapping_mul(0x9E37_79B9);
            Argb8888::new(if i % 2 == 0 { w } else { w & 0x00FF_FFFF })
        })
        .collect()
}

/// Benchmark a line blit with 3 variants: pixblit (best SIMD), pixblit_scalar, naive.
fn bench_line<T: Copy + Default>(
    group: &mut BenchmarkGroup<WallTime>,
    pixblit_fn: fn(&mut [T], &[T]) -> Result<(), pixblit::SizeError>,
    naive_fn: fn(&mut [T], &[T]),
    src: &[T],
) {
    group.bench_function("pixblit", |b| {
        let mut dst = vec![T::default(); src.len()];
        b.iter(|| pixblit_fn(&mut dst, src).unwrap());
    });
    disable_all_simd();
    group.bench_function("pixblit_scalar", |b| {
        let mut dst = vec![T::default(); src.len()];
        b.iter(|| pixblit_fn(&mut dst, src).unwrap());
    });
    enable_all_simd();
    group.bench_function("naive", |b| {
        let mut dst = vec![T::default(); src.len()];
        b.iter(|| naive_fn(&mut dst, src));
    });
}

// === Benchmark groups ===

fn bench_set_line_1555(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_line_if_alpha_argb1555");
    let n = W * H;
    group.throughput(Throughput::Bytes((n * 2) as u64));
    let src = sprite_1555(n);
    bench_line(&mut group, Pixel::set_line_if_alpha, naive_set_line_1555, &src);
    group.finish();
}

fn bench_set_line_8888(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_line_if_alpha_argb8888");
    let n = W * H;
    group.throughput(Throughput::Bytes((n * 4) as u64));
    let src = sprite_8888(n);
    bench_line(&mut group, Argb8888::set_line_if_alpha, naive_set_line_8888, &src);
    group.finish();
}

fn bench_mask_rgb(c: &mut Criterion) {
    let mut group = c.benchmark_group("mask_rgb_argb1555");
    let n = W * H;
    group.throughput(Throughput::Bytes((n * 2) as u64));
    let buf = sprite_1555(n);
    group.bench_function("pixblit", |b| {
        let mut v = buf.clone();
        b.iter(|| Pixel::mask_rgb(&mut v));
    });
    disable_all_simd();
    group.bench_function("pixblit_scalar", |b| {
        let mut v = buf.clone();
        b.iter(|| Pixel::mask_rgb(&mut v));
    });
    enable_all_simd();
    group.bench_function("naive", |b| {
        let mut v = buf.clone();
        b.iter(|| naive_mask_rgb_1555(&mut v));
    });
    group.finish();
}

fn bench_clipped_blit(c: &mut Criterion) {
    let mut group = c.benchmark_group("clipped_blit_256x256");
    let (sw, sh) = (256, 256);
    group.throughput(Throughput::Bytes((sw * sh * 2) as u64));
    let sprite = sprite_1555(sw * sh);
    let mut screen = vec![Pixel::default(); W * H];
    // Straddles the right edge so every row is clipped.
    let at = Pos::new((W - sw / 2) as i32, 100);
    group.bench_function("pixblit", |b| {
        b.iter(|| {
            surface::blit_if_alpha(&mut screen, W, H, W, &sprite, sw, sh, sw, at).unwrap()
        });
    });
    group.finish();
}

// === Custom main for tier detection before criterion runs ===

fn main() {
    print_simd_info();

    let mut criterion = Criterion::default().configure_from_args();
    bench_set_line_1555(&mut criterion);
    bench_set_line_8888(&mut criterion);
    bench_mask_rgb(&mut criterion);
    bench_clipped_blit(&mut criterion);
    criterion.final_summary();
}
