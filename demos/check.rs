use gradlab::check::fixtures::reference_forward;
use gradlab::check::verify::{check_forward, report, ForwardOutput};

fn main() {
    // A correct submission.
    report(
        "forward (correct)",
        &check_forward(|fx| {
            let v = reference_forward(fx);
            Ok(ForwardOutput { n1: v.n1, a1: v.a1, n2: v.n2, a2: v.a2 })
        }),
    );

    // A submission that forgot the hidden bias.
    report(
        "forward (missing bias)",
        &check_forward(|fx| {
            let n1 = fx.weights[0].clone() * fx.input.clone();
            let a1 = n1.map(f64::tanh);
            let n2 = fx.weights[1].clone() * a1.clone() + fx.biases[1].clone();
            Ok(ForwardOutput { n1, a1, n2: n2.clone(), a2: n2 })
        }),
    );

    // A submission that returns a row where a column is expected.
    report(
        "forward (transposed n1)",
        &check_forward(|fx| {
            let v = reference_forward(fx);
            Ok(ForwardOutput { n1: v.n1.transpose(), a1: v.a1, n2: v.n2, a2: v.a2 })
        }),
    );

    // A submission that fails outright.
    report(
        "forward (crashes)",
        &check_forward(|_| Err("attempted to index past the last layer".into())),
    );
}
