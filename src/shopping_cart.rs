// Singleton holding mutable state: every caller of `ShoppingCart::instance()`
// shares the same cart.

use crate::console::Console;
use lazy_static::lazy_static;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: u32,
    name: String,
    cost: f64,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, cost: f64) -> Self {
        Self {
            id,
            name: name.into(),
            cost,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}

#[derive(Debug, Default)]
pub struct ShoppingCart {
    products: Vec<Product>,
}

lazy_static! {
    static ref CART: Mutex<ShoppingCart> = Mutex::new(ShoppingCart::default());
}

impl ShoppingCart {
    pub fn instance() -> &'static Mutex<ShoppingCart> {
        &CART
    }

    /// Locks the shared cart. A panic while holding the lock leaves the
    /// product list intact, so poisoning is ignored.
    pub fn lock() -> MutexGuard<'static, ShoppingCart> {
        lock(Self::instance())
    }

    pub fn cart(&self) -> &[Product] {
        &self.products
    }

    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes every product with `id`; unknown ids are ignored.
    pub fn delete_product_by_id(&mut self, id: u32) {
        self.products.retain(|product| product.id() != id);
    }

    pub fn total_cost(&self) -> f64 {
        self.products.iter().map(Product::cost).sum()
    }
}

fn show_carts<W: Write>(
    console: &mut Console<W>,
    cart1: &Mutex<ShoppingCart>,
    cart2: &Mutex<ShoppingCart>,
) -> io::Result<()> {
    let first = format!("{:?}", lock(cart1).cart());
    let second = format!("{:?}", lock(cart2).cart());
    console.line(format!("Products of the cart 1: {}", first))?;
    console.line(format!("Products of the cart 2: {}", second))
}

fn lock(cart: &Mutex<ShoppingCart>) -> MutexGuard<'_, ShoppingCart> {
    cart.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Adds through both handles, deletes through the second, and shows that
/// both handles always see the same products.
pub fn run_demo<W: Write>(console: &mut Console<W>) -> io::Result<()> {
    let cart = ShoppingCart::instance();
    let cart2 = ShoppingCart::instance();

    lock(cart).add_product(Product::new(1, "iPhone 14", 3000.0));
    lock(cart).add_product(Product::new(2, "Mac M2 pro", 2900.0));
    lock(cart2).add_product(Product::new(3, "AirPods pro", 2400.0));

    show_carts(console, cart, cart2)?;

    lock(cart2).delete_product_by_id(2);

    show_carts(console, cart, cart2)?;

    console.line(format!("Are both carts the same? {}", std::ptr::eq(cart, cart2)))
}
