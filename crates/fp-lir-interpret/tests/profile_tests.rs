use fp_lir::{Address, OptimizationConfig, Ty, Value, ValueKind};
use fp_lir_interpret::nodes::{ConstantNode, SlotReadNode};
use fp_lir_interpret::{
    create_select, BranchCounters, BranchProfile, BranchProfiler, BoxedNode, ExprNode, Frame,
    PlainSelectNode, ProfilingSelectNode, SelectFamily, SelectNode, Unprofiled,
};
use pretty_assertions::assert_eq;

fn profiling() -> OptimizationConfig {
    OptimizationConfig::default().with_branch_injection_select(true)
}

fn bool_select(config: &OptimizationConfig) -> BoxedNode {
    create_select(
        config,
        &Ty::I1,
        SlotReadNode::boxed(0, ValueKind::Bool1),
        ConstantNode::boxed(false),
        ConstantNode::boxed(true),
    )
    .unwrap()
}

#[test]
fn alternating_bool_select_counts_evenly() {
    let node = bool_select(&profiling());
    for i in 0..100 {
        let condition = i % 2 == 0;
        let mut frame = Frame::new(vec![Value::Bool1(condition)]);
        let result = node.execute(&mut frame).unwrap();
        assert_eq!(result, Value::Bool1(!condition));
    }
    assert_eq!(
        node.branch_profile(),
        Some(BranchProfile {
            true_count: 50,
            false_count: 50,
        })
    );
}

#[test]
fn counts_add_up_to_the_number_of_executions() {
    let node = bool_select(&profiling());
    let pattern = [true, true, true, false, true, false, false, true, true];
    let mut frame = Frame::new(vec![Value::Bool1(false)]);
    let mut previous = BranchProfile::default();
    for condition in pattern {
        frame.set(0, Value::Bool1(condition)).unwrap();
        node.execute(&mut frame).unwrap();
        let current = node.branch_profile().unwrap();
        assert!(current.true_count >= previous.true_count);
        assert!(current.false_count >= previous.false_count);
        previous = current;
    }
    let taken = pattern.iter().filter(|c| **c).count() as u64;
    assert_eq!(previous.true_count, taken);
    assert_eq!(previous.false_count, pattern.len() as u64 - taken);
}

#[test]
fn plain_address_select_has_no_profile() {
    let build = |config: &OptimizationConfig| {
        create_select(
            config,
            &Ty::ptr(Ty::I32),
            SlotReadNode::boxed(0, ValueKind::Bool1),
            ConstantNode::boxed(Address(0x1000)),
            ConstantNode::boxed(Address(0x2000)),
        )
        .unwrap()
    };
    let plain = build(&OptimizationConfig::default());
    let profiled = build(&profiling());

    for condition in [true, false, false, true, false] {
        let mut frame = Frame::new(vec![Value::Bool1(condition)]);
        assert_eq!(
            plain.execute(&mut frame).unwrap(),
            profiled.execute(&mut frame).unwrap()
        );
        assert_eq!(plain.branch_profile(), None);
    }
    assert_eq!(profiled.branch_profile().unwrap().total(), 5);
}

#[test]
fn family_is_fixed_at_construction() {
    let mut config = OptimizationConfig::default();
    let node = bool_select(&config);
    config = config.with_branch_injection_select(true);
    assert!(config.branch_injection_select);

    let mut frame = Frame::new(vec![Value::Bool1(true)]);
    node.execute(&mut frame).unwrap();
    assert_eq!(node.branch_profile(), None);
}

#[test]
fn sites_keep_independent_history() {
    let first = bool_select(&profiling());
    let second = bool_select(&profiling());
    let mut frame = Frame::new(vec![Value::Bool1(true)]);
    for _ in 0..3 {
        first.execute(&mut frame).unwrap();
    }
    second.execute(&mut frame).unwrap();
    assert_eq!(first.branch_profile().unwrap().true_count, 3);
    assert_eq!(second.branch_profile().unwrap().true_count, 1);
}

#[test]
fn failing_condition_records_nothing() {
    let node = bool_select(&profiling());
    let mut empty = Frame::default();
    assert!(node.execute(&mut empty).is_err());
    assert_eq!(node.branch_profile(), Some(BranchProfile::default()));
}

#[test]
fn taken_branch_is_counted_before_the_operand_runs() {
    let node = create_select(
        &profiling(),
        &Ty::I32,
        ConstantNode::boxed(false),
        ConstantNode::boxed(1i32),
        SlotReadNode::boxed(9, ValueKind::Int32),
    )
    .unwrap();
    assert!(node.execute(&mut Frame::default()).is_err());
    assert_eq!(
        node.branch_profile(),
        Some(BranchProfile {
            true_count: 0,
            false_count: 1,
        })
    );
}

#[test]
fn concurrent_executions_lose_no_counts() {
    const THREADS: usize = 8;
    const ROUNDS: usize = 1000;

    let node = bool_select(&profiling());
    std::thread::scope(|scope| {
        for t in 0..THREADS {
            let node = &node;
            scope.spawn(move || {
                let mut frame = Frame::new(vec![Value::Bool1(t % 2 == 0)]);
                for _ in 0..ROUNDS {
                    node.execute(&mut frame).unwrap();
                }
            });
        }
    });

    let profile = node.branch_profile().unwrap();
    assert_eq!(profile.true_count, (THREADS / 2 * ROUNDS) as u64);
    assert_eq!(profile.false_count, (THREADS / 2 * ROUNDS) as u64);
}

#[test]
fn typed_nodes_expose_their_profiler() {
    let plain: PlainSelectNode = SelectNode::new(
        ValueKind::Int8,
        ConstantNode::boxed(true),
        ConstantNode::boxed(1i8),
        ConstantNode::boxed(2i8),
        Unprofiled,
    );
    assert_eq!(plain.family(), SelectFamily::Plain);
    assert_eq!(plain.profiler().snapshot(), None);

    let profiled: ProfilingSelectNode = SelectNode::new(
        ValueKind::Int8,
        ConstantNode::boxed(true),
        ConstantNode::boxed(1i8),
        ConstantNode::boxed(2i8),
        BranchCounters::new(),
    );
    let mut frame = Frame::default();
    assert_eq!(profiled.execute(&mut frame).unwrap(), Value::Int8(1));
    assert_eq!(profiled.family(), SelectFamily::Profiling);
    assert_eq!(profiled.profiler().true_count(), 1);
    assert_eq!(profiled.profiler().false_count(), 0);
}

#[test]
fn construction_is_logged() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let node = bool_select(&profiling());
        assert_eq!(node.kind(), ValueKind::Bool1);
    });
}
