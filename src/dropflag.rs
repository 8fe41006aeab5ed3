//! This module is for testing only

use std::rc::Rc;
use std::cell::RefCell;

pub type DropFlag<T> = Rc<RefCell<T>>;

/// Counts its own drops into a shared flag.
///
/// Default values carry no flag, so filler slots created by growth are not counted.
#[derive(Debug, Default)]
pub struct Droppable {
    pub data: i32,
    pub dropflag: Option<DropFlag<usize>>,
}

impl Droppable {
    pub fn new(data: i32, dropflag: &DropFlag<usize>) -> Droppable {
        Droppable { data, dropflag: Some(dropflag.clone()) }
    }
}

impl Clone for Droppable {
    fn clone(&self) -> Self {
        Droppable { data: self.data, dropflag: self.dropflag.clone() }
    }
}

impl PartialEq for Droppable {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Drop for Droppable {
    fn drop(&mut self) {
        if let Some(flag) = &self.dropflag {
            *flag.borrow_mut() += 1;
        }
    }
}

#[test]
fn dropflag() {
    let flag = DropFlag::new(RefCell::new(0));
    let droppable = Droppable::new(7, &flag);
    let filler = Droppable::default();
    assert_eq!(0, *flag.borrow());
    std::mem::drop(droppable);
    std::mem::drop(filler);
    assert_eq!(1, *flag.borrow());
}
