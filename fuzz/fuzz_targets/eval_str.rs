#![no_main]
use libfuzzer_sys::fuzz_target;

use descalc::{EvalOptions, Evaluator};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let lenient = Evaluator::<f64>::new();
        let strict =
            Evaluator::<f64>::with_options(EvalOptions::default().require_full_consumption(true));
        let prefix = lenient.eval_prefix(s);
        if let Ok(x) = strict.eval(s) {
            let prefix = prefix.unwrap();
            assert!(prefix.is_complete());
            assert!(x == prefix.value || (x.is_nan() && prefix.value.is_nan()));
        }
        let _ = Evaluator::<f32>::new().eval(s);
    }
});
