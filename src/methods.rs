//! Array methods looked up by name.
//!
//! A [`MethodTable`] maps method names to functions taking a receiver and
//! positional [`Value`] arguments. It is an ordinary value: build one with
//! [`MethodTable::standard`], override entries with [`MethodTable::install`]
//! (a later install replaces an earlier one of the same name), and pass it to
//! whoever needs to call methods by name. There is no process-wide registry.
//!
//! Arguments are coerced the way scripts expect: numeric arguments go
//! through `Number(..)`, a missing or NaN index falls back to its default,
//! `slice` returns an array only for `true` (not just any truthy value) or
//! when called with no arguments, and callbacks receive `this` plus
//! `(item, index, list)`.

use rustc_hash::FxHashMap;

use crate::coerce::to_integer;
use crate::container::Receiver;
use crate::error::Error;
use crate::list::NodeList;
use crate::node::{Element, Node};
use crate::protocol::{ArrayMethods, METHOD_NAMES, Slice, Spliced};
use crate::value::{Callback, Value};

/// A method callable through a [`MethodTable`].
pub type Method = fn(&mut Value, &[Value]) -> Result<Value, Error>;

#[derive(Clone)]
pub struct MethodTable {
    methods: FxHashMap<String, Method>,
}

impl MethodTable {
    /// A table with no methods at all.
    pub fn new() -> MethodTable {
        return MethodTable { methods: FxHashMap::default() };
    }

    /// A table holding every array method.
    pub fn standard() -> MethodTable {
        let mut table = MethodTable::new();
        for name in METHOD_NAMES {
            if let Some(method) = builtin(name) {
                table.install(name, method);
            }
        }
        return table;
    }

    /// Install `method` under `name`, returning the method it replaced.
    pub fn install(&mut self, name: impl Into<String>, method: Method) -> Option<Method> {
        let name = name.into();
        let replaced = self.methods.insert(name.clone(), method);
        tracing::debug!(name = %name, replaced = replaced.is_some(), "installed method");
        return replaced;
    }

    pub fn remove(&mut self, name: &str) -> Option<Method> {
        return self.methods.remove(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        return self.methods.contains_key(name);
    }

    pub fn get(&self, name: &str) -> Option<Method> {
        return self.methods.get(name).copied();
    }

    /// Installed names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        return names;
    }

    pub fn len(&self) -> usize {
        return self.methods.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.methods.is_empty();
    }

    /// Call `name` on `this`.
    pub fn call(&self, this: &mut Value, name: &str, args: &[Value]) -> Result<Value, Error> {
        let method = self
            .get(name)
            .ok_or_else(|| Error::NotAFunction { name: name.to_string() })?;
        return method(this, args);
    }
}

impl Default for MethodTable {
    fn default() -> Self {
        return MethodTable::standard();
    }
}

impl std::fmt::Debug for MethodTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return f.debug_struct("MethodTable").field("methods", &self.names()).finish();
    }
}

fn builtin(name: &str) -> Option<Method> {
    let method: Method = match name {
        "push" => push,
        "pop" => pop,
        "shift" => shift,
        "unshift" => unshift,
        "splice" => splice,
        "concat" => concat,
        "slice" => slice,
        "join" => join,
        "reverse" => reverse,
        "forEach" => for_each,
        "map" => map,
        "filter" => filter,
        "every" => every,
        "some" => some,
        "sort" => sort,
        "indexOf" => index_of,
        "lastIndexOf" => last_index_of,
        _ => return None,
    };
    return Some(method);
}

// =============================================================================
// Argument handling
// =============================================================================

/// The list behind `this`. Anything that isn't a list node fails the guard.
fn receiver<'a>(this: &'a mut Value, method: &str) -> Result<&'a mut NodeList, Error> {
    return match this {
        Value::Node(node) => node.list_mut(method),
        _ => Err(Error::receiver(method)),
    };
}

fn nodes(args: &[Value]) -> Vec<Node> {
    return args.iter().cloned().map(Value::into_node).collect();
}

fn array(items: Vec<Element>) -> Value {
    return Value::Array(items.into_iter().map(Value::from).collect());
}

fn optional_item(item: Option<Element>) -> Value {
    return item.map_or(Value::Undefined, Value::from);
}

/// The callback and `this` argument of the iterating methods.
fn callback_args(args: &[Value]) -> Result<(Callback, Value), Error> {
    let callback = args.first().ok_or(Error::CallbackType)?.as_callback()?.clone();
    let this_arg = args.get(1).cloned().unwrap_or_default();
    return Ok((callback, this_arg));
}

fn invoke(callback: &Callback, this_arg: &Value, item: &Element, index: usize, list: &NodeList) -> Value {
    let args = [
        Value::from(item.clone()),
        Value::Number(index as f64),
        Value::from(list.clone()),
    ];
    return callback.call(this_arg, &args);
}

/// `Number(x) || 0`, rounded toward zero.
fn integer_arg(args: &[Value], index: usize) -> i64 {
    let n = args.get(index).map_or(f64::NAN, Value::to_number);
    return if n.is_nan() { 0 } else { to_integer(n) };
}

// =============================================================================
// Methods
// =============================================================================

fn push(this: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let len = receiver(this, "push")?.push(nodes(args))?;
    return Ok(Value::Number(len as f64));
}

fn pop(this: &mut Value, _args: &[Value]) -> Result<Value, Error> {
    return Ok(optional_item(receiver(this, "pop")?.pop()?));
}

fn shift(this: &mut Value, _args: &[Value]) -> Result<Value, Error> {
    return Ok(optional_item(receiver(this, "shift")?.shift()?));
}

fn unshift(this: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let len = receiver(this, "unshift")?.unshift(nodes(args))?;
    return Ok(Value::Number(len as f64));
}

/// A negative start counts back from the end and a start past the end
/// clamps to it. A missing count removes nothing.
fn splice(this: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let list = receiver(this, "splice")?;
    let len = list.len() as i64;

    let start = match integer_arg(args, 0) {
        n if n < 0 => n.saturating_add(len).max(0),
        n => n.min(len),
    };
    let how_many = integer_arg(args, 1).max(0);
    let items = nodes(args.get(2..).unwrap_or_default());

    let removed = list.splice(start as usize, how_many as usize, items)?;
    return Ok(match removed {
        Spliced::One(item) => Value::from(item),
        Spliced::Many(items) => array(items),
    });
}

fn concat(this: &mut Value, args: &[Value]) -> Result<Value, Error> {
    return Ok(Value::from(receiver(this, "concat")?.concat(nodes(args))?));
}

fn slice(this: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let list = receiver(this, "slice")?;
    let from = args.first().map(Value::to_number);
    let to = args.get(1).map(Value::to_number);
    let return_array = args.is_empty() || matches!(args.get(2), Some(Value::Bool(true)));

    return Ok(match list.slice(from, to, return_array)? {
        Slice::Array(items) => array(items),
        Slice::List(list) => Value::from(list),
    });
}

fn join(this: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let list = receiver(this, "join")?;
    let separator = match args.first() {
        None | Some(Value::Undefined) => ",".to_string(),
        Some(separator) => separator.to_js_string(),
    };
    return Ok(Value::Text(list.join(&separator)?));
}

fn reverse(this: &mut Value, _args: &[Value]) -> Result<Value, Error> {
    return Ok(Value::from(receiver(this, "reverse")?.reverse()?));
}

fn for_each(this: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let list = receiver(this, "forEach")?;
    let (callback, this_arg) = callback_args(args)?;
    list.for_each(|item, i, list| {
        invoke(&callback, &this_arg, item, i, list);
    })?;
    return Ok(Value::Undefined);
}

fn map(this: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let list = receiver(this, "map")?;
    let (callback, this_arg) = callback_args(args)?;
    let mapped = list.map(|item, i, list| invoke(&callback, &this_arg, item, i, list).into_node())?;
    return Ok(Value::from(mapped));
}

fn filter(this: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let list = receiver(this, "filter")?;
    let (callback, this_arg) = callback_args(args)?;
    let kept = list.filter(|item, i, list| invoke(&callback, &this_arg, item, i, list).is_truthy())?;
    return Ok(Value::from(kept));
}

fn every(this: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let list = receiver(this, "every")?;
    let (callback, this_arg) = callback_args(args)?;
    let all = list.every(|item, i, list| invoke(&callback, &this_arg, item, i, list).is_truthy())?;
    return Ok(Value::Bool(all));
}

fn some(this: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let list = receiver(this, "some")?;
    let (callback, this_arg) = callback_args(args)?;
    let any = list.some(|item, i, list| invoke(&callback, &this_arg, item, i, list).is_truthy())?;
    return Ok(Value::Bool(any));
}

/// The comparator's result is read by sign; NaN counts as equal.
fn sort(this: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let list = receiver(this, "sort")?;
    let sorted = match args.first() {
        None | Some(Value::Undefined) => list.sort()?,
        Some(compare) => {
            let compare = compare.as_callback()?;
            list.sort_by(|a, b| {
                let args = [Value::from(a.clone()), Value::from(b.clone())];
                let order = compare.call(&Value::Undefined, &args).to_number();
                order.partial_cmp(&0.0).unwrap_or(std::cmp::Ordering::Equal)
            })?
        }
    };
    return Ok(Value::from(sorted));
}

fn index_of(this: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let list = receiver(this, "indexOf")?;
    let needle = args.first().cloned().unwrap_or_default();
    let from = args.get(1).map(Value::to_number);
    return Ok(position(list.index_of(&needle, from)?));
}

fn last_index_of(this: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let list = receiver(this, "lastIndexOf")?;
    let needle = args.first().cloned().unwrap_or_default();
    let from = args.get(1).map(Value::to_number);
    return Ok(position(list.last_index_of(&needle, from)?));
}

fn position(index: Option<usize>) -> Value {
    return Value::Number(index.map_or(-1.0, |i| i as f64));
}
