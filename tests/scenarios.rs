use linked_bag_queue::prelude::*;

#[test]
fn test_bag_reverses_insertion_order() {
    let mut bag = Bag::new();
    bag.add(1);
    bag.add(2);
    bag.add(3);

    assert_eq!(3, bag.len());
    assert_eq!(vec![3, 2, 1], bag.iter().copied().collect::<Vec<_>>());
    assert_eq!("[3, 2, 1]", bag.to_string());
}

#[test]
fn test_queue_drains_in_fifo_order() {
    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    queue.enqueue(3);

    assert_eq!(Some(1), queue.dequeue());
    assert_eq!(Some(2), queue.dequeue());
    assert_eq!(Some(3), queue.dequeue());
    assert_eq!(None, queue.dequeue());
    assert!(queue.is_empty());
}

#[test]
fn test_queue_interleaved_operations() {
    let mut queue = Queue::new();
    let mut results = Vec::new();
    queue.enqueue(1);
    results.extend(queue.dequeue());
    queue.enqueue(2);
    queue.enqueue(3);
    results.extend(queue.dequeue());

    assert_eq!(vec![1, 2], results);
    assert_eq!(1, queue.len());
    assert_eq!(Some(&3), queue.peek());
    assert_eq!("[3]", queue.to_string());
}

#[test]
fn test_empty_containers_render_as_brackets() {
    assert_eq!("[]", Bag::<u8>::new().to_string());
    assert_eq!("[]", Queue::<u8>::new().to_string());
    assert_eq!("[]", format!("{:?}", Bag::<u8>::default()));
    assert_eq!("[]", format!("{:?}", Queue::<u8>::default()));
}

#[test]
fn test_is_empty_tracks_len() {
    let mut bag = Bag::new();
    let mut queue = Queue::new();
    assert!(bag.is_empty() && queue.is_empty());

    for i in 0..10 {
        bag.add(i);
        queue.enqueue(i);
        assert_eq!(bag.is_empty(), bag.len() == 0);
        assert_eq!(queue.is_empty(), queue.len() == 0);
    }
    while queue.dequeue().is_some() {
        assert_eq!(queue.is_empty(), queue.len() == 0);
    }
    assert!(queue.is_empty());
    assert_eq!(10, bag.len());
}

#[test]
fn test_consuming_iterators_follow_natural_order() {
    let bag: Bag<_> = ["one", "two", "three"].into_iter().collect();
    let queue: Queue<_> = ["one", "two", "three"].into_iter().collect();

    assert_eq!(vec!["three", "two", "one"], bag.into_iter().collect::<Vec<_>>());
    assert_eq!(vec!["one", "two", "three"], queue.into_iter().collect::<Vec<_>>());
}

#[test]
fn test_large_containers_drop_cleanly() {
    let bag: Bag<_> = (0..1_000_000u64).collect();
    let queue: Queue<_> = (0..1_000_000u64).collect();
    assert_eq!(Some(&999_999), bag.iter().next());
    assert_eq!(Some(&0), queue.peek());
    drop(bag);
    drop(queue);
}
