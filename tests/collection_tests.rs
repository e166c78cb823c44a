use digraph::{HeapEmpty, LinkedQueue, LinkedStack, MinHeap, PriorityQueue, QueueEmpty, StackEmpty};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Insert(i16),
    Remove,
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            3 => any::<i16>().prop_map(Operation::Insert),
            2 => Just(Operation::Remove),
        ],
        0..200,
    )
}

proptest! {
    #[test]
    fn queue_returns_insertion_order(values in proptest::collection::vec(any::<u32>(), 0..100)) {
        let mut queue = LinkedQueue::new();
        for &v in &values {
            queue.enqueue(v);
        }
        prop_assert_eq!(queue.len(), values.len());

        let mut out = Vec::new();
        while let Ok(v) = queue.dequeue() {
            out.push(v);
        }
        prop_assert_eq!(out, values);
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn stack_returns_reverse_order(values in proptest::collection::vec(any::<u32>(), 0..100)) {
        let mut stack = LinkedStack::new();
        for &v in &values {
            stack.push(v);
        }

        let mut out = Vec::new();
        while let Ok(v) = stack.pop() {
            out.push(v);
        }
        let mut expected = values;
        expected.reverse();
        prop_assert_eq!(out, expected);
        prop_assert!(stack.is_empty());
    }

    #[test]
    fn heap_drains_in_non_decreasing_order(priorities in proptest::collection::vec(any::<i32>(), 0..150)) {
        let mut heap = MinHeap::new();
        for (i, &p) in priorities.iter().enumerate() {
            heap.add(p, i);
        }

        let mut drained = Vec::new();
        while let Ok((p, _)) = heap.remove_min() {
            drained.push(p);
        }
        prop_assert!(heap.is_empty());
        prop_assert!(drained.windows(2).all(|w| w[0] <= w[1]));

        let mut expected = priorities;
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn queue_matches_model(ops in operations()) {
        let mut queue = LinkedQueue::new();
        let mut model = std::collections::VecDeque::new();
        for op in ops {
            match op {
                Operation::Insert(v) => {
                    queue.enqueue(v);
                    model.push_back(v);
                }
                Operation::Remove => {
                    prop_assert_eq!(queue.dequeue().ok(), model.pop_front());
                }
            }
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            prop_assert_eq!(queue.len(), model.len());
        }
        prop_assert!(queue.iter().eq(model.iter()));
    }

    #[test]
    fn stack_matches_model(ops in operations()) {
        let mut stack = LinkedStack::new();
        let mut model = Vec::new();
        for op in ops {
            match op {
                Operation::Insert(v) => {
                    stack.push(v);
                    model.push(v);
                }
                Operation::Remove => {
                    prop_assert_eq!(stack.pop().ok(), model.pop());
                }
            }
            prop_assert_eq!(stack.is_empty(), model.is_empty());
        }
        prop_assert!(stack.iter().eq(model.iter().rev()));
    }

    #[test]
    fn heap_matches_sorted_model(ops in operations()) {
        let mut heap = MinHeap::new();
        let mut model: Vec<i16> = Vec::new();
        for op in ops {
            match op {
                Operation::Insert(p) => {
                    heap.add(p, ());
                    model.push(p);
                }
                Operation::Remove => {
                    model.sort_unstable_by(|a, b| b.cmp(a));
                    prop_assert_eq!(heap.remove_min().ok().map(|(p, ())| p), model.pop());
                }
            }
            prop_assert_eq!(heap.len(), model.len());
        }
    }
}

#[test]
fn empty_structures_report_their_own_error() {
    let mut queue: LinkedQueue<u8> = LinkedQueue::new();
    let mut stack: LinkedStack<u8> = LinkedStack::new();
    let mut heap: MinHeap<u8, u8> = MinHeap::new();
    let mut pq: PriorityQueue<u8, u8> = PriorityQueue::new();

    assert_eq!(queue.dequeue(), Err(QueueEmpty));
    assert_eq!(stack.pop(), Err(StackEmpty));
    assert_eq!(heap.remove_min(), Err(HeapEmpty));
    assert_eq!(pq.dequeue(), Err(HeapEmpty));

    // Failed removals leave everything usable.
    queue.enqueue(1);
    stack.push(2);
    heap.add(3, 30);
    pq.enqueue(4, 40);
    assert_eq!(queue.dequeue(), Ok(1));
    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(heap.remove_min(), Ok((3, 30)));
    assert_eq!(pq.dequeue(), Ok((4, 40)));
}

#[test]
fn priority_queue_over_existing_heap() {
    let heap: MinHeap<u32, &str> = [(3, "c"), (1, "a"), (2, "b")].into_iter().collect();
    let mut pq = PriorityQueue::from(heap);
    let order: Vec<_> = std::iter::from_fn(|| pq.dequeue().ok()).map(|(_, v)| v).collect();
    assert_eq!(order, vec!["a", "b", "c"]);
}
