//! Dynamically typed arguments and results for [`MethodTable`](crate::MethodTable).
//!
//! The typed [`ArrayMethods`](crate::ArrayMethods) API takes exactly what it
//! needs. Callers that only know method names and positional arguments at
//! runtime go through a method table instead, and pass [`Value`]s that get
//! coerced the way a script engine would coerce them.

use std::fmt;
use std::rc::Rc;

use crate::coerce::{number_to_string, to_number, LooseEq};
use crate::error::Error;
use crate::list::NodeList;
use crate::node::{Element, Node};

type CallbackFn = dyn Fn(&Value, &[Value]) -> Value;

/// A callable argument. It receives `this` and the positional arguments.
#[derive(Clone)]
pub struct Callback(Rc<CallbackFn>);

impl Callback {
    pub fn new(f: impl Fn(&Value, &[Value]) -> Value + 'static) -> Callback {
        Callback(Rc::new(f))
    }

    pub fn call(&self, this: &Value, args: &[Value]) -> Value {
        (self.0)(this, args)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

/// Two callbacks are equal only if they are the same function object.
impl PartialEq for Callback {
    fn eq(&self, other: &Callback) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Undefined,
    Bool(bool),
    Number(f64),
    Text(String),
    Node(Node),
    /// A plain array, as returned by `slice` and `splice`.
    Array(Vec<Value>),
    Function(Callback),
}

impl Value {
    pub fn function(f: impl Fn(&Value, &[Value]) -> Value + 'static) -> Value {
        Value::Function(Callback::new(f))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Text(s) => !s.is_empty(),
            Value::Node(_) | Value::Array(_) | Value::Function(_) => true,
        }
    }

    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined | Value::Function(_) => f64::NAN,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::Text(s) => to_number(s),
            Value::Node(node) => to_number(&node.string_value()),
            Value::Array(_) => to_number(&self.to_js_string()),
        }
    }

    /// The string a script engine would produce for this value.
    pub fn to_js_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => number_to_string(*n),
            Value::Text(s) => s.clone(),
            Value::Node(node) => node.string_value(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Undefined => String::new(),
                    item => item.to_js_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Function(_) => "function () { [native code] }".to_string(),
        }
    }

    /// The node written into a list when this value is assigned to a slot.
    /// Nodes go in as they are; anything else becomes a text node.
    pub fn into_node(self) -> Node {
        match self {
            Value::Node(node) => node,
            value => Node::Single(Element::Text(value.to_js_string())),
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_callback(&self) -> Result<&Callback, Error> {
        match self {
            Value::Function(callback) => Ok(callback),
            _ => Err(Error::CallbackType),
        }
    }
}

/// How a list element compares against a dynamic search argument.
impl LooseEq<Value> for Element {
    fn loose_eq(&self, other: &Value) -> bool {
        match other {
            Value::Undefined | Value::Function(_) => false,
            Value::Bool(b) => self.loose_eq(b),
            Value::Number(n) => self.loose_eq(n),
            Value::Text(s) => self.loose_eq(s),
            Value::Node(node) => self.loose_eq(node),
            Value::Array(_) => self.loose_eq(&other.to_js_string()),
        }
    }
}

impl From<Element> for Value {
    fn from(element: Element) -> Value {
        Value::Node(Node::Single(element))
    }
}

impl From<NodeList> for Value {
    fn from(list: NodeList) -> Value {
        Value::Node(Node::List(list))
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Value {
        Value::Node(node)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(Value::from(Node::list()).is_truthy());
    }

    #[test]
    fn numbers() {
        assert!(Value::Undefined.to_number().is_nan());
        assert_eq!(Value::from(true).to_number(), 1.0);
        assert_eq!(Value::from(" 12 ").to_number(), 12.0);
        assert_eq!(Value::from(Element::tag("n").with_text("3")).to_number(), 3.0);
        assert_eq!(Value::Array(vec![]).to_number(), 0.0);
        assert_eq!(Value::Array(vec![Value::from(4)]).to_number(), 4.0);
    }

    #[test]
    fn strings() {
        assert_eq!(Value::from(1.5).to_js_string(), "1.5");
        assert_eq!(Value::from(7).to_js_string(), "7");
        assert_eq!(
            Value::Array(vec![Value::from(1), Value::Undefined, Value::from("x")]).to_js_string(),
            "1,,x"
        );
    }

    #[test]
    fn primitives_become_text_nodes() {
        assert_eq!(Value::from(5).into_node(), Node::from("5"));
        assert_eq!(Value::Undefined.into_node(), Node::from("undefined"));
        let node = Node::from(Element::tag("a"));
        assert_eq!(Value::from(node.clone()).into_node(), node);
    }

    #[test]
    fn callbacks() {
        let double = Value::function(|_, args| Value::from(args[0].to_number() * 2.0));
        let callback = double.as_callback().unwrap();
        assert_eq!(callback.call(&Value::Undefined, &[Value::from(21)]), Value::from(42));
        assert_eq!(double.clone(), double);
        assert_eq!(Value::from(1).as_callback().unwrap_err(), Error::CallbackType);
    }

    #[test]
    fn elements_match_dynamic_values() {
        let five = Element::text("5");
        assert!(five.loose_eq(&Value::from(5)));
        assert!(five.loose_eq(&Value::from("5")));
        assert!(five.loose_eq(&Value::from(Node::from("5"))));
        assert!(!five.loose_eq(&Value::Undefined));
    }
}
