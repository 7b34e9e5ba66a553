//! Compiled-in course data. Section bodies are markdown-ish text whose
//! csharp-fenced blocks are runnable through the snippet runner.

pub struct Module {
    pub key: &'static str,
    pub title: &'static str,
    pub sections: &'static [Section],
}

pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const MODULES: &[Module] = &[
    Module {
        key: "introduction",
        title: "Introduction to C#",
        sections: &[
            Section {
                heading: "What is C#?",
                body: r#"C# is a modern, object-oriented programming language developed by Microsoft and standardized by ECMA and ISO.
It is designed for building a wide range of applications that run on the .NET framework.

**Key Features:**
- **Object-Oriented:** Supports encapsulation, inheritance, and polymorphism.
- **Type-Safe:** Prevents type errors during compilation.
- **Modern Constructs:** Includes LINQ, async/await, and more.
- **Rich Standard Library:** Extensive libraries for various functionalities.
- **Cross-Platform:** Develop applications for Windows, Linux, macOS, and more.
"#,
            },
            Section {
                heading: "Hello, World!",
                body: r#"The classic first program prints "Hello, World!" to the console.

```csharp
using System;

namespace HelloWorld
{
    class Program
    {
        static void Main(string[] args)
        {
            Console.WriteLine("Hello, World!");
        }
    }
}
```
"#,
            },
        ],
    },
    Module {
        key: "basics",
        title: "C# Basics",
        sections: &[
            Section {
                heading: "Data Types & Variables",
                body: r#"C# is statically typed, meaning each variable and object has a known type at compile time.

**Common Data Types:**
- `int`: For integers
- `double`: For floating-point numbers
- `bool`: For boolean values (`true`/`false`)
- `string`: For text
- `char`: For a single character

**Example:**

```csharp
int number = 10;
double pi = 3.14159;
bool isActive = true;
string greeting = "Hello, C#!";
char letter = 'A';
```
"#,
            },
            Section {
                heading: "Control Structures",
                body: r#"C# provides familiar control flow statements like `if`, `for`, `while`, and `foreach`.

**If Statement:**

```csharp
if (number > 0)
{
    Console.WriteLine("Positive number");
}
else
{
    Console.WriteLine("Zero or negative number");
}
```

**For Loop:**

```csharp
for (int i = 0; i < 5; i++)
{
    Console.WriteLine("Iteration: " + i);
}
```

**Foreach Loop:**

```csharp
string[] fruits = { "Apple", "Banana", "Cherry" };
foreach (var fruit in fruits)
{
    Console.WriteLine(fruit);
}
```
"#,
            },
            Section {
                heading: "Methods",
                body: r#"Methods in C# define reusable blocks of code.

```csharp
public int Add(int a, int b)
{
    return a + b;
}
```

Methods can also be asynchronous using `async`/`await` keywords or defined as `static` if they belong to the class rather than an instance.
"#,
            },
        ],
    },
    Module {
        key: "advanced",
        title: "Advanced C# Topics",
        sections: &[
            Section {
                heading: "Asynchronous Programming with async/await",
                body: r#"Asynchronous programming helps keep applications responsive. With `async` and `await`:

```csharp
public async Task FetchDataAsync()
{
    using HttpClient client = new HttpClient();
    string data = await client.GetStringAsync("https://api.example.com/data");
    Console.WriteLine(data);
}
```

This allows the application to continue running while waiting for I/O operations to complete.
"#,
            },
            Section {
                heading: "LINQ (Language Integrated Query)",
                body: r#"LINQ provides a declarative syntax for querying in-memory collections.

**Example: Filtering a List:**

```csharp
List<int> numbers = new List<int> { 1, 2, 3, 4, 5 };
var evenNumbers = numbers.Where(n => n % 2 == 0);

foreach (int num in evenNumbers)
{
    Console.WriteLine(num);
}
```
"#,
            },
            Section {
                heading: "Generics",
                body: r#"Generics let you define type-safe data structures.

```csharp
List<string> names = new List<string>();
names.Add("Alice");
names.Add("Bob");
```

With generics, you avoid boxing/unboxing and get compile-time type checks.
"#,
            },
            Section {
                heading: "Reflection",
                body: r#"Reflection allows you to inspect types at runtime.

```csharp
Type typeInfo = typeof(MyClass);
var methods = typeInfo.GetMethods();

foreach (var method in methods)
{
    Console.WriteLine(method.Name);
}
```
"#,
            },
            Section {
                heading: "Delegates and Events",
                body: r#"Delegates are type-safe function pointers, and events provide a way to notify subscribers.

**Example:**

```csharp
public delegate void Notify(string message);

public class Process
{
    public event Notify ProcessCompleted;

    public void StartProcess()
    {
        // Process logic here
        OnProcessCompleted("Process finished successfully.");
    }

    protected virtual void OnProcessCompleted(string message)
    {
        ProcessCompleted?.Invoke(message);
    }
}
```
"#,
            },
            Section {
                heading: "Interfaces and Abstract Classes",
                body: r#"Interfaces and abstract classes allow you to define contracts and base implementations.

**Interface Example:**

```csharp
public interface IAnimal
{
    void Speak();
}

public class Dog : IAnimal
{
    public void Speak()
    {
        Console.WriteLine("Woof!");
    }
}
```

**Abstract Class Example:**

```csharp
public abstract class Shape
{
    public abstract double Area();
}

public class Circle : Shape
{
    public double Radius { get; set; }

    public override double Area()
    {
        return Math.PI * Radius * Radius;
    }
}
```
"#,
            },
            Section {
                heading: "Dependency Injection",
                body: r#"Dependency Injection (DI) is a design pattern that allows for decoupling dependencies, making code more modular and testable.

**Example Using Constructor Injection:**

```csharp
public interface ILogger
{
    void Log(string message);
}

public class ConsoleLogger : ILogger
{
    public void Log(string message)
    {
        Console.WriteLine(message);
    }
}

public class UserService
{
    private readonly ILogger _logger;

    public UserService(ILogger logger)
    {
        _logger = logger;
    }

    public void CreateUser(string username)
    {
        // Create user logic
        _logger.Log($"User {username} created.");
    }
}
```
"#,
            },
            Section {
                heading: "Design Patterns",
                body: r#"Design Patterns provide reusable solutions to common software design problems.

**Singleton Pattern Example:**

```csharp
public class Singleton
{
    private static Singleton _instance;

    private Singleton() { }

    public static Singleton Instance
    {
        get
        {
            if (_instance == null)
            {
                _instance = new Singleton();
            }
            return _instance;
        }
    }

    public void DoSomething()
    {
        Console.WriteLine("Singleton instance method called.");
    }
}
```
"#,
            },
        ],
    },
    Module {
        key: "quizzes",
        title: "Quizzes",
        sections: &[Section {
            heading: "Test Your Knowledge",
            body: r#"Below are some multiple-choice questions to evaluate what you have learned.
Answer them with `csharp-trainer quiz --answers ...` to see your score.
"#,
        }],
    },
    Module {
        key: "glossary",
        title: "Glossary",
        sections: &[Section {
            heading: "Key Terms",
            body: r#"**Encapsulation**: The bundling of data with the methods that operate on that data.

**Inheritance**: A mechanism where one class acquires the property of another class.

**Polymorphism**: The ability of different classes to be treated as instances of the same class through inheritance.

**Delegates**: Type-safe function pointers used to pass methods as arguments.

**Async/Await**: Keywords used to write asynchronous code more easily.

**LINQ**: Language Integrated Query, used for querying data in a more readable way.

**Generics**: Allow classes and methods to operate with any data type without sacrificing type safety.

**Reflection**: The ability of a program to inspect and modify its own structure and behavior at runtime.

**Dependency Injection**: A design pattern that implements inversion of control for resolving dependencies.

**Design Patterns**: Reusable solutions to common software design problems.
"#,
        }],
    },
    Module {
        key: "references",
        title: "References and Resources",
        sections: &[Section {
            heading: "Further Reading",
            body: r#"- [Microsoft C# Documentation](https://docs.microsoft.com/en-us/dotnet/csharp/)
- [C# Programming Guide](https://docs.microsoft.com/en-us/dotnet/csharp/programming-guide/)
- [C# Tutorials on Microsoft Learn](https://docs.microsoft.com/en-us/learn/paths/csharp-first-steps/)
- [Pro C# 8 with .NET Core](https://www.apress.com/gp/book/9781484257552)
- [C# Design Patterns](https://www.dofactory.com/net/design-patterns)
"#,
        }],
    },
];
